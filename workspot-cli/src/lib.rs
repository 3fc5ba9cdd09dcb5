//! Command-line interface for scoring and ranking Workspot places.
//!
//! Each subcommand reads a place list exported from the places search API,
//! scores it, and prints JSON to standard output:
//! - `score` prints every place with its factor breakdown.
//! - `rank` prints a named view, or the filtered and sorted search results.
//! - `summary` prints area metrics.
//!
//! Arguments layer CLI flags over `WORKSPOT_CMDS_<COMMAND>_<FIELD>`
//! environment variables over configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use workspot_rank::View;

mod error;
mod input;
mod rank;
mod score;
mod summary;

pub use error::CliError;

use rank::RankArgs;
use score::ScoreArgs;
use summary::SummaryArgs;

const ARG_PLACES: &str = "places";
const ARG_VIEW: &str = "view";
const ARG_TYPE: &str = "type";
const ARG_NOISE: &str = "noise";
const ARG_SORT: &str = "sort";
const ENV_SCORE_PLACES: &str = "WORKSPOT_CMDS_SCORE_PLACES";
const ENV_RANK_PLACES: &str = "WORKSPOT_CMDS_RANK_PLACES";
const ENV_SUMMARY_PLACES: &str = "WORKSPOT_CMDS_SUMMARY_PLACES";

/// Run the Workspot CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files or output
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &mut stdout)
}

fn execute(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => score::run_score(args, writer),
        Command::Rank(args) => rank::run_rank(args, writer),
        Command::Summary(args) => summary::run_summary(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "workspot",
    about = "Score, rank and summarise workspace venues",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every place and print the factor breakdowns.
    Score(ScoreArgs),
    /// Rank places under a named view or the generic search controls.
    Rank(RankArgs),
    /// Print area metrics for a place list.
    Summary(SummaryArgs),
}

/// Comma-separated list of view tokens, for help and error text.
fn view_names() -> String {
    View::ALL
        .iter()
        .map(|view| view.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
