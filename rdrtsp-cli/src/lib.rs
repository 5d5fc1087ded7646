//! Command-line interface for the rdrtsp day-partitioned route planner.
//!
//! `rdrtsp <path> <start>` loads a location file, prints a summary of its
//! day pools and then the planned route, one stop name per line.
#![forbid(unsafe_code)]

use clap::{ArgAction, Parser};
use log::LevelFilter;

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_SOURCE: &str = "source";
const ARG_START: &str = "start";
const ARG_BOUND: &str = "bound";
const ARG_STRATEGY: &str = "strategy";

/// Run the CLI with the current process arguments.
///
/// # Errors
///
/// Returns [`CliError::ArgumentParsing`] for usage errors, which the caller
/// should hand back to clap for rendering, and any loading or planning
/// failure otherwise.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    run_plan(cli.plan)
}

#[derive(Debug, Parser)]
#[command(
    name = "rdrtsp",
    about = "Plan a three-day visiting order over a location file",
    version
)]
struct Cli {
    #[command(flatten)]
    plan: PlanArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    let installed = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .format_target(false)
        .try_init();
    if let Err(err) = installed {
        log::debug!("logger already installed: {err}");
    }
}

#[cfg(test)]
mod tests;
