use crate::cli::constants::{ERROR_GEOIP, ERROR_READING_LOGS, INVALID_LOG_MSG, MISSING_ARGUMENT_ERR};
use crate::cli::{AnalyzeArgs, AnalyzerConfig, ReportFormat, load_log_lines};
use crate::counter::{
    BROWSERS_CATEGORY, BrowserCounter, COUNTRIES_CATEGORY, CategoryCounter, CountryCounter,
    OPERATING_SYSTEMS_CATEGORY, OsCounter,
};
use crate::enrichment::user_agent::{ClassificationCache, build_ua_engine};
use crate::report::render_json;
use crate::session::AnalysisSession;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// How a run ended, short of an unexpected error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Reported,
    MissingArgument,
    InputUnreadable,
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Reported | RunOutcome::MissingArgument => ExitCode::SUCCESS,
            RunOutcome::InputUnreadable => ExitCode::FAILURE,
        }
    }
}

/// Analyze one log file and print the report to stdout.
///
/// Failing to read the log file aborts with no report and a failure status. A GeoIP database
/// that cannot be opened only drops the country breakdown.
pub fn run(args: AnalyzeArgs) -> Result<RunOutcome> {
    let Some(config) = AnalyzerConfig::from_args(args) else {
        print_diagnostic(MISSING_ARGUMENT_ERR, None);
        return Ok(RunOutcome::MissingArgument);
    };
    config.validate()?;

    let lines = match load_log_lines(&config.log_file) {
        Ok(lines) => lines,
        Err(err) => {
            print_diagnostic(ERROR_READING_LOGS, Some(&err.to_string()));
            return Ok(RunOutcome::InputUnreadable);
        }
    };

    let engine = build_ua_engine(config.ua_engine, config.ua_regexes.as_deref())
        .context("failed to build user-agent classifier")?;

    let mut session = AnalysisSession::with_counters(
        lines,
        ClassificationCache::new(engine),
        build_counters(&config),
    );
    session.calculate();

    match config.format {
        ReportFormat::Text => print!("{}", session.report()),
        ReportFormat::Json => {
            let reports = session.category_reports();
            println!("{}", render_json(&reports).context("failed to serialize report")?);
        }
    }

    let stderr = io::stderr();
    let colored = stderr.is_terminal();
    write_counter_diagnostics(&mut stderr.lock(), &session, config.show_unresolved, colored)
        .context("failed to write diagnostics")?;
    Ok(RunOutcome::Reported)
}

/// Countries first, then operating systems and browsers. The country counter is skipped when
/// its database cannot be opened.
pub fn build_counters(config: &AnalyzerConfig) -> Vec<Box<dyn CategoryCounter>> {
    let mut counters: Vec<Box<dyn CategoryCounter>> = Vec::new();

    match CountryCounter::open(COUNTRIES_CATEGORY, &config.geoip_db) {
        Ok(counter) => counters.push(Box::new(counter)),
        Err(err) => {
            tracing::warn!(error = %err, "country breakdown disabled");
            print_diagnostic(ERROR_GEOIP, Some(&err.to_string()));
        }
    }

    counters.push(Box::new(OsCounter::new(OPERATING_SYSTEMS_CATEGORY)));
    counters.push(Box::new(BrowserCounter::new(BROWSERS_CATEGORY)));
    counters
}

/// `Invalid log: <reason>` per malformed address, then the not-found addresses in sorted order
/// when `show_unresolved` is set.
pub(crate) fn write_counter_diagnostics(
    out: &mut impl Write,
    session: &AnalysisSession,
    show_unresolved: bool,
    colored: bool,
) -> io::Result<()> {
    for counter in session.counters() {
        let Some(diagnostics) = counter.diagnostics() else {
            continue;
        };

        for reason in &diagnostics.malformed {
            write_diagnostic(out, INVALID_LOG_MSG, Some(reason), colored)?;
        }

        if show_unresolved && !diagnostics.not_found.is_empty() {
            writeln!(out, "Unresolved IPs ({}):", diagnostics.not_found.len())?;
            for ip in &diagnostics.not_found {
                writeln!(out, "  {ip}")?;
            }
        }
    }
    Ok(())
}

fn write_diagnostic(
    out: &mut impl Write,
    prefix: &str,
    detail: Option<&str>,
    colored: bool,
) -> io::Result<()> {
    let detail = detail.unwrap_or_default();
    if colored {
        writeln!(out, "{}{}", prefix.red().bold(), detail)
    } else {
        writeln!(out, "{prefix}{detail}")
    }
}

fn print_diagnostic(prefix: &str, detail: Option<&str>) {
    let stderr = io::stderr();
    let colored = stderr.is_terminal();
    // Nothing useful to do if stderr itself is gone.
    let _ = write_diagnostic(&mut stderr.lock(), prefix, detail, colored);
}
