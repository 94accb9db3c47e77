mod cache;
mod uaparser_engine;
mod woothee_engine;

use crate::cli::UaEngineKind;
use crate::enrichment::user_agent::uaparser_engine::UaParserEngine;
use crate::enrichment::user_agent::woothee_engine::WootheeEngine;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use cache::ClassificationCache;

/// uap-core patterns used when no regexes file is given.
const REGEXES_YAML: &[u8] = include_bytes!("regexes.yaml");

/// Family name reported by both engines when a user agent is not recognized.
pub const UNKNOWN_FAMILY: &str = "Other";

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read user-agent regexes {path}: {source}")]
    ReadRegexes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build user-agent parser from {source_name}: {message}")]
    InvalidRegexes { source_name: String, message: String },
}

/// Structured view of one user-agent string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub os_family: Option<String>,
    pub browser_family: Option<String>,
}

/// Turns a raw user-agent string into a [`Classification`].
///
/// Implementations must be total and deterministic: unrecognized input yields sentinel
/// families rather than an error, and the same input always yields the same output.
pub trait UserAgentClassifier: Send + Sync {
    fn classify(&self, ua: &str) -> Classification;
}

/// Build the selected engine. `uaparser` reads `regexes` when given and falls back to the
/// bundled uap-core patterns otherwise; `woothee` ignores it.
pub fn build_ua_engine(
    kind: UaEngineKind,
    regexes: Option<&Path>,
) -> Result<UaEngine, ClassifierError> {
    match kind {
        UaEngineKind::Woothee => Ok(UaEngine::Woothee(WootheeEngine::new())),
        UaEngineKind::UaParser => {
            let (yaml, source_name) = match regexes {
                Some(path) => {
                    let yaml = fs::read(path).map_err(|source| ClassifierError::ReadRegexes {
                        path: path.to_path_buf(),
                        source,
                    })?;
                    (Cow::Owned(yaml), path.display().to_string())
                }
                None => (Cow::Borrowed(REGEXES_YAML), "bundled regexes".to_string()),
            };

            let engine =
                UaParserEngine::new(&yaml).map_err(|e| ClassifierError::InvalidRegexes {
                    source_name,
                    message: e.to_string(),
                })?;
            Ok(UaEngine::UaParser(engine))
        }
    }
}

pub enum UaEngine {
    UaParser(UaParserEngine),
    Woothee(WootheeEngine),
}

impl UserAgentClassifier for UaEngine {
    fn classify(&self, ua: &str) -> Classification {
        match self {
            UaEngine::UaParser(p) => p.parse(ua),
            UaEngine::Woothee(p) => p.parse(ua),
        }
    }
}
