//! `score` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use workspot_scorer::WorkabilityScorer;

use crate::input::{load_places, require_file};
use crate::{ARG_PLACES, CliError, ENV_SCORE_PLACES, write_json};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score every place in a JSON export from the places search \
                 API. Each entry is printed with its composite score, the \
                 WiFi, power, noise and amenity factors, and a reliability \
                 ratio.",
    about = "Score every place in a place list"
)]
#[ortho_config(prefix = "WORKSPOT")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON place list.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) places: Utf8PathBuf,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_SCORE_PLACES,
        })?;
        Ok(Self { places })
    }
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    score_with_config(&config, writer)
}

pub(crate) fn score_with_config(
    config: &ScoreConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_file(&config.places, ARG_PLACES)?;
    let places = load_places(&config.places)?;
    let scored = WorkabilityScorer::default().score_all(&places);
    write_json(writer, &scored)
}
