//! Category counters.
//!
//! A counter looks at every parsed record of a session and decides whether, and under which
//! label, that record contributes to its category. The session treats every counter the same
//! way; adding a category means adding a [`CategoryCounter`] implementation.

mod browser;
mod country;
mod os;
mod table;

#[cfg(test)]
mod tests;

use crate::record::ParsedRecord;
use std::collections::BTreeSet;

pub use browser::BrowserCounter;
pub use country::CountryCounter;
pub use os::OsCounter;
pub use table::FrequencyTable;

pub const COUNTRIES_CATEGORY: &str = "Countries";
pub const OPERATING_SYSTEMS_CATEGORY: &str = "Operating systems";
pub const BROWSERS_CATEGORY: &str = "Browsers";

pub trait CategoryCounter: Send {
    /// Count one record. Records that carry no value for this category are ignored.
    fn consume(&mut self, record: &ParsedRecord);

    fn frequency_table(&self) -> &FrequencyTable;

    fn category_name(&self) -> &str;

    /// Records this counter saw but could not resolve, if it tracks any.
    fn diagnostics(&self) -> Option<&CounterDiagnostics> {
        None
    }
}

/// Side channel for records a counter could not place in its table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterDiagnostics {
    /// Identifiers that resolved cleanly but had no entry in the backing data.
    pub not_found: BTreeSet<String>,
    /// Human-readable reasons for records whose identifier could not be processed.
    pub malformed: Vec<String>,
}

impl CounterDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.not_found.is_empty() && self.malformed.is_empty()
    }
}
