pub mod cli;
pub mod counter;
pub mod enrichment;
pub mod logging;
pub mod record;
pub mod report;
pub mod session;

pub use counter::{BrowserCounter, CategoryCounter, CountryCounter, FrequencyTable, OsCounter};
pub use enrichment::user_agent::{Classification, ClassificationCache, UserAgentClassifier};
pub use record::{ParsedRecord, parse_line};
pub use session::AnalysisSession;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
