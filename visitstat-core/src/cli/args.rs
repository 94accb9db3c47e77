use crate::logging::LogFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Access log to analyze
    pub log_file: Option<PathBuf>,

    /// MaxMind country database used to resolve client addresses
    #[arg(long, default_value = "GeoLite2-Country.mmdb")]
    pub geoip_db: PathBuf,

    /// User-agent classification engine
    #[arg(long, value_enum, default_value_t = UaEngineKind::UaParser)]
    pub ua_engine: UaEngineKind,

    /// uap-core regexes.yaml for the uaparser engine (defaults to the bundled copy)
    #[arg(long)]
    pub ua_regexes: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// List addresses missing from the GeoIP database after the report
    #[arg(long)]
    pub show_unresolved: bool,

    /// Diagnostic log format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UaEngineKind {
    #[value(name = "uaparser")]
    UaParser,
    Woothee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
