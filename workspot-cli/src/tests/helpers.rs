//! Test helpers for writing place exports and driving CLI invocations.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Three venues and one stray entry, in the shape the places API returns.
pub(super) const SAMPLE_PLACES: &str = r#"{
    "places": [
        {
            "id": "bean",
            "title": "Bean There",
            "type": "coffee",
            "distance": "0.4",
            "download": "60",
            "power": "range3",
            "noise_level": "Quiet",
            "coffee": "1",
            "food": "1"
        },
        {
            "id": "hub",
            "title": "Hub",
            "type": "coworking",
            "distance": "1.2",
            "download": "30",
            "power": "range2",
            "noise_level": "Average",
            "food": "0"
        },
        42,
        {
            "id": "local",
            "title": "The Local",
            "type": "bar",
            "distance": "0.2",
            "download": "5",
            "power": "none",
            "noise_level": "Noisy",
            "alcohol": "1",
            "outdoor_seating": "1"
        }
    ]
}"#;

/// A temporary directory holding a place export.
#[derive(Debug)]
pub(super) struct PlacesFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl PlacesFile {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("places.json");
        fs::write(&path, contents).expect("write places file");
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn sample() -> Self {
        Self::with_contents(SAMPLE_PLACES)
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Parse `args` as a full command line and run it, capturing stdout.
pub(super) fn run_cli(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    let mut output = Vec::new();
    execute(cli.command, &mut output)?;
    Ok(String::from_utf8(output).expect("utf-8 output"))
}

/// Run `args` and decode the JSON printed to stdout.
pub(super) fn run_cli_json(args: &[&str]) -> Value {
    let output = run_cli(args).expect("command should succeed");
    serde_json::from_str(&output).expect("output should be JSON")
}

/// Collect the `place.id` of every entry in a JSON place list.
pub(super) fn ids(places: &Value) -> Vec<String> {
    places
        .as_array()
        .expect("place list")
        .iter()
        .filter_map(|entry| entry["place"]["id"].as_str().map(str::to_owned))
        .collect()
}
