//! Behaviour-driven step definitions driving the CLI command scenarios.

use super::helpers::{PlacesFile, ids, run_cli};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

/// Aggregates command scenario state so each step takes a single world.
#[derive(Debug, Default)]
struct CommandWorld {
    export: RefCell<Option<PlacesFile>>,
    missing_path: RefCell<Option<Utf8PathBuf>>,
    outcome: RefCell<Option<Result<String, CliError>>>,
}

impl CommandWorld {
    fn places_path(&self) -> String {
        if let Some(path) = self.missing_path.borrow().as_ref() {
            return path.to_string();
        }
        self.export
            .borrow()
            .as_ref()
            .expect("place export should be written")
            .path()
            .to_string()
    }

    fn run(&self, extra: &[&str]) {
        let path = self.places_path();
        let mut args = vec!["workspot"];
        args.extend(extra.iter().take(1));
        args.push(&path);
        args.extend(extra.iter().skip(1));
        self.outcome.replace(Some(run_cli(&args)));
    }

    fn output(&self) -> Value {
        let borrowed = self.outcome.borrow();
        let output = borrowed
            .as_ref()
            .expect("command should have run")
            .as_ref()
            .expect("command should succeed");
        serde_json::from_str(output).expect("output should be JSON")
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::default()
}

#[given("a place export with three venues and one stray entry")]
fn given_export(#[from(world)] world: &CommandWorld) {
    world.export.replace(Some(PlacesFile::sample()));
}

#[given("a place export path that does not exist")]
fn given_missing_export(#[from(world)] world: &CommandWorld) {
    let file = PlacesFile::sample();
    world
        .missing_path
        .replace(Some(file.root().join("absent.json")));
    world.export.replace(Some(file));
}

#[when("I run the score command")]
fn when_score(#[from(world)] world: &CommandWorld) {
    world.run(&["score"]);
}

#[when("I run the rank command with the private view")]
fn when_rank_private(#[from(world)] world: &CommandWorld) {
    world.run(&["rank", "--view", "private"]);
}

#[when("I run the summary command")]
fn when_summary(#[from(world)] world: &CommandWorld) {
    world.run(&["summary"]);
}

#[then("three scored places are printed")]
fn then_three_places(#[from(world)] world: &CommandWorld) {
    assert_eq!(ids(&world.output()).len(), 3);
}

#[then("the first place scores 9.0")]
fn then_first_score(#[from(world)] world: &CommandWorld) {
    assert_eq!(world.output()[0]["workability"]["score"].as_f64(), Some(9.0));
}

#[then("only the coworking hub is listed")]
fn then_only_hub(#[from(world)] world: &CommandWorld) {
    assert_eq!(ids(&world.output()["places"]), vec!["hub"]);
}

#[then("each noise bucket counts one place")]
fn then_noise_buckets(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    for bucket in ["quiet", "moderate", "noisy"] {
        assert_eq!(output["noiseDistribution"][bucket].as_u64(), Some(1));
    }
}

#[then("the CLI reports that the places file is missing")]
fn then_missing_file(#[from(world)] world: &CommandWorld) {
    let borrowed = world.outcome.borrow();
    let error = borrowed
        .as_ref()
        .expect("command should have run")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_PLACES),
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(scoring_an_export, "Scoring a place export");
register_command_scenario!(ranking_under_a_view, "Ranking under a named view");
register_command_scenario!(summarising_an_export, "Summarising a place export");
register_command_scenario!(missing_export_file, "Pointing at a file that does not exist");
