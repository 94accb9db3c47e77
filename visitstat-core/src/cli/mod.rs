mod args;
mod config;
mod constants;
mod input;
mod run;

#[cfg(test)]
mod tests;

pub use args::{AnalyzeArgs, ReportFormat, UaEngineKind};
pub use config::AnalyzerConfig;
pub use input::{InputError, load_log_lines};
pub use run::{RunOutcome, build_counters, run};
