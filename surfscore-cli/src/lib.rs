//! Command-line interface for scoring surf conditions at catalogued spots.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod score;
mod spots;

pub use error::CliError;

use score::{ScoreArgs, run_score};
use spots::{SpotsArgs, run_spots};

pub(crate) const ARG_SPOT: &str = "spot";
pub(crate) const ARG_SPOTS_FILE: &str = "spots-file";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_ORIENTATION: &str = "orientation";
pub(crate) const ARG_TIDE_PREFERENCE: &str = "tide-preference";
pub(crate) const ARG_IDEAL_HEIGHT_MIN: &str = "ideal-height-min";
pub(crate) const ARG_IDEAL_HEIGHT_MAX: &str = "ideal-height-max";
pub(crate) const ARG_IDEAL_PERIOD_MIN: &str = "ideal-period-min";
pub(crate) const ARG_IDEAL_PERIOD_MAX: &str = "ideal-period-max";
pub(crate) const ARG_WEIGHT_RANGE: &str = "weight-range";
pub(crate) const ARG_WEIGHT_ORIENTATION: &str = "weight-orientation";
pub(crate) const ARG_WEIGHT_TIDE: &str = "weight-tide";
pub(crate) const ARG_TIDE_LOW_MAX: &str = "tide-low-max";
pub(crate) const ARG_TIDE_HIGH_MIN: &str = "tide-high-min";
pub(crate) const ARG_TIDE_HIGH_MAX: &str = "tide-high-max";
pub(crate) const ARG_TIDE_FULL_SPAN: &str = "tide-full-span";
pub(crate) const ARG_TIMEZONE: &str = "timezone";
pub(crate) const ARG_MARINE_BASE_URL: &str = "marine-base-url";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ENV_LATITUDE: &str = "SURFSCORE_CMDS_SCORE_LATITUDE";
pub(crate) const ENV_LONGITUDE: &str = "SURFSCORE_CMDS_SCORE_LONGITUDE";

/// Run the surfscore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// catalogue loading, the observation fetch or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(*args),
        Command::Spots(args) => run_spots(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "surfscore",
    about = "Score surf conditions from marine forecast data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the current marine observation for a spot and score it.
    Score(Box<ScoreArgs>),
    /// List the spots in the catalogue.
    Spots(SpotsArgs),
}

#[cfg(test)]
mod tests;
