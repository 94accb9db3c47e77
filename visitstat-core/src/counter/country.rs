use crate::counter::{CategoryCounter, CounterDiagnostics, FrequencyTable};
use crate::enrichment::geoip::{GeoDbError, GeoLookupError, GeoResolver, MaxMindResolver};
use crate::record::ParsedRecord;
use std::collections::BTreeSet;
use std::path::Path;

/// Counts records per client country.
///
/// Addresses that cannot be placed are kept out of the table: unknown addresses go to the
/// not-found set, unparseable ones to the malformed list.
pub struct CountryCounter {
    name: String,
    resolver: Box<dyn GeoResolver>,
    table: FrequencyTable,
    diagnostics: CounterDiagnostics,
}

impl CountryCounter {
    pub fn new(name: impl Into<String>, resolver: impl GeoResolver + 'static) -> Self {
        Self {
            name: name.into(),
            resolver: Box::new(resolver),
            table: FrequencyTable::new(),
            diagnostics: CounterDiagnostics::default(),
        }
    }

    /// Build a counter backed by a MaxMind database. Fails if the database cannot be opened.
    pub fn open(name: impl Into<String>, db_path: &Path) -> Result<Self, GeoDbError> {
        let resolver = MaxMindResolver::open(db_path)?;
        tracing::debug!(db = %db_path.display(), "geoip database opened");
        Ok(Self::new(name, resolver))
    }

    pub fn not_found_ips(&self) -> &BTreeSet<String> {
        &self.diagnostics.not_found
    }

    pub fn malformed(&self) -> &[String] {
        &self.diagnostics.malformed
    }
}

impl CategoryCounter for CountryCounter {
    fn consume(&mut self, record: &ParsedRecord) {
        let Some(ip) = record.ip.as_deref() else {
            return;
        };

        match self.resolver.lookup(ip) {
            Ok(country) if !country.is_empty() => self.table.increment(&country),
            Ok(_) => {}
            Err(GeoLookupError::NotFound(ip)) => {
                self.diagnostics.not_found.insert(ip);
            }
            Err(err @ GeoLookupError::Malformed { .. }) => {
                tracing::debug!(error = %err, "could not resolve client address");
                self.diagnostics.malformed.push(err.to_string());
            }
        }
    }

    fn frequency_table(&self) -> &FrequencyTable {
        &self.table
    }

    fn category_name(&self) -> &str {
        &self.name
    }

    fn diagnostics(&self) -> Option<&CounterDiagnostics> {
        Some(&self.diagnostics)
    }
}
