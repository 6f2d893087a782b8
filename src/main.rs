use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use covsum::{cli::Args, logging};
use covsum_core::SummaryConfig;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("covsum: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<ExitCode> {
    let config = SummaryConfig::try_from(args).context("invalid arguments")?;
    let outcome = covsum_core::run(&config)
        .with_context(|| format!("cannot summarise '{}'", config.report.display()))?;

    log::debug!("summarised {} file(s)", outcome.files);
    if outcome.fails_strict_check() {
        log::warn!("overall coverage is below the {}% threshold", config.threshold);
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
