use crate::counter::{CategoryCounter, FrequencyTable};
use crate::record::ParsedRecord;

/// Counts records per browser family.
pub struct BrowserCounter {
    name: String,
    table: FrequencyTable,
}

impl BrowserCounter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: FrequencyTable::new(),
        }
    }
}

impl CategoryCounter for BrowserCounter {
    fn consume(&mut self, record: &ParsedRecord) {
        if let Some(browser) = record.browser_family() {
            self.table.increment(browser);
        }
    }

    fn frequency_table(&self) -> &FrequencyTable {
        &self.table
    }

    fn category_name(&self) -> &str {
        &self.name
    }
}
