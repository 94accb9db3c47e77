use crate::enrichment::user_agent::{Classification, ClassificationCache};
use std::sync::Arc;

/// Fields extracted from one raw log line, before any classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRecord {
    /// Dotted-decimal client address, if the line starts with one.
    pub ip: Option<String>,
    /// Interior of the last quoted field on the line.
    pub user_agent: Option<String>,
}

/// A log line ready to be fed to category counters.
///
/// Records are immutable once derived, so the session can replay them to counters
/// registered after the first pass.
#[derive(Debug, Clone, Default)]
pub struct ParsedRecord {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    /// Shared with every other record carrying the same user-agent string.
    pub classification: Option<Arc<Classification>>,
}

impl ParsedRecord {
    pub fn derive(line: &str, cache: &ClassificationCache) -> Self {
        Self::from_line_record(super::parse_line(line), cache)
    }

    pub fn from_line_record(record: LineRecord, cache: &ClassificationCache) -> Self {
        let classification = record.user_agent.as_deref().map(|ua| cache.classify(ua));

        Self {
            ip: record.ip,
            user_agent: record.user_agent,
            classification,
        }
    }

    pub fn os_family(&self) -> Option<&str> {
        self.classification
            .as_ref()
            .and_then(|c| c.os_family.as_deref())
            .filter(|family| !family.is_empty())
    }

    pub fn browser_family(&self) -> Option<&str> {
        self.classification
            .as_ref()
            .and_then(|c| c.browser_family.as_deref())
            .filter(|family| !family.is_empty())
    }
}
