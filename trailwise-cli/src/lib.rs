//! Command-line interface for the Trailwise recommendation engine.
//!
//! Every subcommand loads trail and weather files, runs the engine and
//! prints its result to standard output as pretty JSON. Options are layered
//! from CLI flags, configuration files and `TRAILWISE_CMDS_*` environment
//! variables.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8Path;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use trailwise_core::DateWindow;
use trailwise_data::load_engine_config;
use trailwise_recommender::RouteRecommender;

mod error;
mod preference;
mod recommend;
mod stats;
mod trail;
mod weekly;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend_with};
use stats::{StatsArgs, run_stats_with};
use trail::{TrailArgs, run_trail_with};
use weekly::{WeeklyArgs, run_weekly_with};

pub(crate) const ARG_TRAILS: &str = "trails";
pub(crate) const ARG_WEATHER: &str = "weather";
pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_TRAIL_ID: &str = "id";
pub(crate) const ENV_RECOMMEND_TRAILS: &str = "TRAILWISE_CMDS_RECOMMEND_TRAILS";
pub(crate) const ENV_RECOMMEND_WEATHER: &str = "TRAILWISE_CMDS_RECOMMEND_WEATHER";
pub(crate) const ENV_WEEKLY_TRAILS: &str = "TRAILWISE_CMDS_WEEKLY_TRAILS";
pub(crate) const ENV_WEEKLY_WEATHER: &str = "TRAILWISE_CMDS_WEEKLY_WEATHER";
pub(crate) const ENV_WEEKLY_START: &str = "TRAILWISE_CMDS_WEEKLY_START";
pub(crate) const ENV_STATS_WEATHER: &str = "TRAILWISE_CMDS_STATS_WEATHER";
pub(crate) const ENV_STATS_LOCATION: &str = "TRAILWISE_CMDS_STATS_LOCATION";
pub(crate) const ENV_TRAIL_TRAILS: &str = "TRAILWISE_CMDS_TRAIL_TRAILS";
pub(crate) const ENV_TRAIL_ID: &str = "TRAILWISE_CMDS_TRAIL_ID";

/// Run the Trailwise CLI with the current process arguments and environment,
/// writing results to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, an input cannot be
/// loaded or the engine rejects the request.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with_args(std::env::args_os(), &mut stdout)
}

/// Run the CLI with explicit arguments, writing results to `writer`.
///
/// The first argument is the program name, as with [`std::env::args_os`].
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, an input cannot be
/// loaded or the engine rejects the request.
pub fn run_with_args<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Weekly(args) => run_weekly_with(args, writer),
        Command::Stats(args) => run_stats_with(args, writer),
        Command::Trail(args) => run_trail_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trailwise",
    about = "Recommend hiking trails from weather history and personal preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank trails against preferences and historical weather.
    Recommend(RecommendArgs),
    /// Suggest trails for each day of a week.
    Weekly(WeeklyArgs),
    /// Summarise the weather history of one location.
    Stats(StatsArgs),
    /// Describe a single trail.
    Trail(TrailArgs),
}

/// Build a recommender from an optional engine configuration file.
pub(crate) fn build_recommender(
    engine_config: Option<&Utf8Path>,
) -> Result<RouteRecommender, CliError> {
    let Some(path) = engine_config else {
        return Ok(RouteRecommender::new());
    };
    Ok(RouteRecommender::with_config(load_engine_config(path)?)?)
}

/// Turn optional `--from`/`--to` bounds into a window.
pub(crate) fn window_from(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Option<DateWindow>, CliError> {
    match (from, to) {
        (Some(start), Some(end)) => Ok(Some(DateWindow::new(start, end)?)),
        (None, None) => Ok(None),
        _ => Err(CliError::IncompleteWindow),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
