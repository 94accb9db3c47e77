use crate::counter::{CategoryCounter, FrequencyTable};
use crate::record::ParsedRecord;

/// Counts records per operating-system family.
pub struct OsCounter {
    name: String,
    table: FrequencyTable,
}

impl OsCounter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: FrequencyTable::new(),
        }
    }
}

impl CategoryCounter for OsCounter {
    fn consume(&mut self, record: &ParsedRecord) {
        if let Some(os) = record.os_family() {
            self.table.increment(os);
        }
    }

    fn frequency_table(&self) -> &FrequencyTable {
        &self.table
    }

    fn category_name(&self) -> &str {
        &self.name
    }
}
