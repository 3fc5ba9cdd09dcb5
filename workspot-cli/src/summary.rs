//! `summary` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use workspot_rank::summarize;

use crate::input::{load_places, require_file};
use crate::{ARG_PLACES, CliError, ENV_SUMMARY_PLACES, write_json};

/// CLI arguments for the `summary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "summary",
    long_about = "Summarise a place list: average WiFi speed, outlet \
                 availability, how many places fall in each noise bucket, \
                 and amenity coverage.",
    about = "Print area metrics for a place list"
)]
#[ortho_config(prefix = "WORKSPOT")]
pub(crate) struct SummaryArgs {
    /// Path to a JSON place list.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
}

/// Resolved `summary` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryConfig {
    pub(crate) places: Utf8PathBuf,
}

impl TryFrom<SummaryArgs> for SummaryConfig {
    type Error = CliError;

    fn try_from(args: SummaryArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_SUMMARY_PLACES,
        })?;
        Ok(Self { places })
    }
}

pub(crate) fn run_summary(args: SummaryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = SummaryConfig::try_from(merged)?;
    summary_with_config(&config, writer)
}

pub(crate) fn summary_with_config(
    config: &SummaryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_file(&config.places, ARG_PLACES)?;
    let places = load_places(&config.places)?;
    write_json(writer, &summarize(&places))
}
