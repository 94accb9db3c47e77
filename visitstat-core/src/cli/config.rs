use crate::cli::{AnalyzeArgs, ReportFormat, UaEngineKind};
use std::path::PathBuf;

/// Resolved run options for one analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub log_file: PathBuf,
    pub geoip_db: PathBuf,
    pub ua_engine: UaEngineKind,
    pub ua_regexes: Option<PathBuf>,
    pub format: ReportFormat,
    pub show_unresolved: bool,
}

impl AnalyzerConfig {
    /// `None` when no log file was given.
    pub fn from_args(args: AnalyzeArgs) -> Option<Self> {
        Some(Self {
            log_file: args.log_file?,
            geoip_db: args.geoip_db,
            ua_engine: args.ua_engine,
            ua_regexes: args.ua_regexes,
            format: args.format,
            show_unresolved: args.show_unresolved,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.ua_engine, &self.ua_regexes) {
            (UaEngineKind::Woothee, Some(_)) => {
                anyhow::bail!("`--ua-regexes` only applies to the uaparser engine")
            }
            _ => Ok(()),
        }
    }
}
