use clap::Parser;
use std::process::ExitCode;
use visitstat_core::cli::{AnalyzeArgs, run};
use visitstat_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "visitstat",
    version,
    about = "Visitor breakdown by country, OS and browser from web-server access logs"
)]
struct Cli {
    #[command(flatten)]
    analyze: AnalyzeArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.analyze.log_format.unwrap_or_else(default_log_format));

    match run(cli.analyze) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("visitstat error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
