//! Behavioural coverage for place signal interpretation.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use workspot_core::{NoiseBucket, Place, PowerTier};

/// World state for the place signal scenarios.
#[derive(Debug, Default)]
struct SignalWorld {
    noise_text: RefCell<Vec<&'static str>>,
    buckets: RefCell<Vec<NoiseBucket>>,
    power_text: RefCell<Option<&'static str>>,
    power: RefCell<Option<PowerTier>>,
    place: RefCell<Option<Place>>,
}

#[fixture]
fn world() -> SignalWorld {
    SignalWorld::default()
}

#[given("the noise descriptions lower than average, average level and pretty noisy")]
fn given_noise_text(world: &SignalWorld) {
    world
        .noise_text
        .replace(vec!["Lower than average", "Average level", "Pretty noisy"]);
}

#[when("I classify the noise descriptions")]
fn when_classify_noise(world: &SignalWorld) {
    let buckets = world
        .noise_text
        .borrow()
        .iter()
        .map(|text| NoiseBucket::classify(text))
        .collect();
    world.buckets.replace(buckets);
}

#[then("they land in the quiet, moderate and noisy buckets")]
fn then_buckets(world: &SignalWorld) {
    assert_eq!(
        *world.buckets.borrow(),
        vec![NoiseBucket::Quiet, NoiseBucket::Moderate, NoiseBucket::Noisy]
    );
}

#[given("the power token plenty of sockets")]
fn given_power_text(world: &SignalWorld) {
    world.power_text.replace(Some("plenty of sockets"));
}

#[when("I classify the power token")]
fn when_classify_power(world: &SignalWorld) {
    let tier = PowerTier::classify(*world.power_text.borrow());
    world.power.replace(Some(tier));
}

#[then("the power tier is unknown")]
fn then_power_unknown(world: &SignalWorld) {
    assert_eq!(*world.power.borrow(), Some(PowerTier::Unknown));
}

#[given("a place categorised as a coffee shop without a coffee flag")]
fn given_coffee_shop(world: &SignalWorld) {
    world
        .place
        .replace(Some(Place::new("shop").with_kind("Coffee Shop")));
}

#[then("the place serves coffee")]
fn then_serves_coffee(world: &SignalWorld) {
    let borrowed = world.place.borrow();
    assert!(borrowed.as_ref().is_some_and(Place::serves_coffee));
}

#[scenario(path = "tests/features/place_signals.feature", index = 0)]
fn noise_text_lands_in_buckets(world: SignalWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/place_signals.feature", index = 1)]
fn unrecognised_power_is_unknown(world: SignalWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/place_signals.feature", index = 2)]
fn coffee_category_implies_coffee(world: SignalWorld) {
    let _ = world;
}
