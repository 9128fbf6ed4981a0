//! Command-line interface for planning hours-of-service compliant trips.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::{TripArgs, run_logs_with, run_plan_with};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_START_DATE: &str = "start-date";
pub(crate) const ARG_START_TIME: &str = "start-time";
pub(crate) const ARG_AVERAGE_SPEED: &str = "average-speed-mph";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_REQUEST: &str = "HAULAGE_CMDS_TRIP_REQUEST_PATH";

/// Run the Haulage CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => run_plan_with(args, &mut stdout),
        Command::Logs(args) => run_logs_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "haulage",
    about = "Plan truck trips with rest breaks, fuel stops and daily logs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the route, stops and daily logs for a trip request.
    Plan(TripArgs),
    /// Print only the daily log sheets for a trip request.
    Logs(TripArgs),
}

#[cfg(test)]
mod tests;
