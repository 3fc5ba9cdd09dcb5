//! `rank` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use workspot_rank::{ANY, RankedView, SearchFilter, SortOrder, View, search};
use workspot_scorer::WorkabilityScorer;

use crate::input::{load_places, require_file};
use crate::{
    ARG_NOISE, ARG_PLACES, ARG_SORT, ARG_TYPE, ARG_VIEW, CliError, ENV_RANK_PLACES, write_json,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank a place list. With --view, print one of the named \
                 views (closest, fastest-wifi, meeting-ready, social, focus, \
                 group, private). Without it, print the search results after \
                 the --type and --noise filters, ordered by --sort.",
    about = "Rank places under a view or the search controls"
)]
#[ortho_config(prefix = "WORKSPOT")]
pub(crate) struct RankArgs {
    /// Path to a JSON place list.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Named view to print.
    #[arg(long = ARG_VIEW, value_name = "name")]
    #[serde(default)]
    pub(crate) view: Option<String>,
    /// Exact place category to keep, or "any".
    #[arg(long = ARG_TYPE, value_name = "category")]
    #[serde(default)]
    pub(crate) kind: Option<String>,
    /// Noise bucket to keep (quiet, moderate, noisy), or "any".
    #[arg(long = ARG_NOISE, value_name = "bucket")]
    #[serde(default)]
    pub(crate) noise: Option<String>,
    /// Result order: "score_high" for best first; anything else keeps input order.
    #[arg(long = ARG_SORT, value_name = "order")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) view: Option<View>,
    pub(crate) filter: SearchFilter,
    pub(crate) sort: SortOrder,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_RANK_PLACES,
        })?;
        let view = args
            .view
            .as_deref()
            .map(str::parse::<View>)
            .transpose()
            .map_err(CliError::InvalidView)?;
        let filter = SearchFilter::parse(
            args.kind.as_deref().unwrap_or(ANY),
            args.noise.as_deref().unwrap_or(ANY),
        );
        let sort = args
            .sort
            .as_deref()
            .map(SortOrder::parse)
            .unwrap_or_default();
        Ok(Self {
            places,
            view,
            filter,
            sort,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    rank_with_config(&config, writer)
}

pub(crate) fn rank_with_config(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_file(&config.places, ARG_PLACES)?;
    let places = load_places(&config.places)?;
    let scored = WorkabilityScorer::default().score_all(&places);
    match config.view {
        Some(view) => {
            let filtered = config.filter.apply(&scored);
            debug!("ranking {} filtered places under {view}", filtered.len());
            let ranked = RankedView {
                view,
                places: view.rank(&filtered),
            };
            write_json(writer, &ranked)
        }
        None => write_json(writer, &search(&scored, &config.filter, config.sort)),
    }
}

#[cfg(test)]
pub(crate) fn rank_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
