//! Behavioural tests for single location evaluation.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use sitescout_core::{LocationProfile, WeightError, WeightVector};
use sitescout_scorer::{EvaluateError, evaluate};

type Outcome = RefCell<Option<Result<sitescout_core::EvaluationResult, EvaluateError>>>;

#[fixture]
fn profile() -> RefCell<LocationProfile> {
    RefCell::new(LocationProfile::sample())
}

#[fixture]
fn outcome() -> Outcome {
    RefCell::new(None)
}

#[given("the sample location profile")]
fn given_sample(#[from(profile)] profile: &RefCell<LocationProfile>) {
    *profile.borrow_mut() = LocationProfile::sample();
}

#[given("the sample location profile paying the tier1 standard rent")]
fn given_standard_rent(#[from(profile)] profile: &RefCell<LocationProfile>) {
    let mut profile = profile.borrow_mut();
    *profile = LocationProfile::sample();
    // 500 per m² over 100 m².
    profile.monthly_rent = 50_000.0;
}

#[given("the sample location profile with saturated surroundings")]
fn given_saturated(#[from(profile)] profile: &RefCell<LocationProfile>) {
    let mut profile = profile.borrow_mut();
    *profile = LocationProfile::sample();
    profile.amenities_completeness = 10.0;
    profile.residential_density = 10.0;
    profile.commercial_density = 10.0;
}

#[when("I evaluate the location")]
fn when_evaluate(
    #[from(profile)] profile: &RefCell<LocationProfile>,
    #[from(outcome)] outcome: &Outcome,
) {
    let result = evaluate(&profile.borrow(), &WeightVector::default());
    *outcome.borrow_mut() = Some(result);
}

#[when("I evaluate the location with all-zero weights")]
fn when_evaluate_zero_weights(
    #[from(profile)] profile: &RefCell<LocationProfile>,
    #[from(outcome)] outcome: &Outcome,
) {
    let zeros = WeightVector {
        foot_traffic: 0.0,
        rent: 0.0,
        competition: 0.0,
        amenities: 0.0,
        transportation: 0.0,
        target_match: 0.0,
    };
    let result = evaluate(&profile.borrow(), &zeros);
    *outcome.borrow_mut() = Some(result);
}

#[then("the location is rated good")]
fn then_rated_good(#[from(outcome)] outcome: &Outcome) {
    let borrowed = outcome.borrow();
    let result = borrowed
        .as_ref()
        .expect("evaluation ran")
        .as_ref()
        .expect("evaluation succeeded");
    assert_eq!(result.rating, sitescout_core::Rating::Good);
}

#[then("the rent sub-score is {expected:f64}")]
fn then_rent_score(expected: f64, #[from(outcome)] outcome: &Outcome) {
    let borrowed = outcome.borrow();
    let result = borrowed
        .as_ref()
        .expect("evaluation ran")
        .as_ref()
        .expect("evaluation succeeded");
    assert!((result.scores.rent - expected).abs() <= 1e-9);
}

#[then("the amenities sub-score is {expected:f64}")]
fn then_amenities_score(expected: f64, #[from(outcome)] outcome: &Outcome) {
    let borrowed = outcome.borrow();
    let result = borrowed
        .as_ref()
        .expect("evaluation ran")
        .as_ref()
        .expect("evaluation succeeded");
    assert!((result.scores.amenities - expected).abs() <= 1e-9);
}

#[then("the evaluation fails with a zero-sum weight error")]
fn then_zero_sum(#[from(outcome)] outcome: &Outcome) {
    let borrowed = outcome.borrow();
    let result = borrowed.as_ref().expect("evaluation ran");
    assert!(matches!(
        result,
        Err(EvaluateError::Weights(WeightError::ZeroSum))
    ));
}

#[scenario(path = "tests/features/evaluation.feature", index = 0)]
fn balanced_profile_rates_good(profile: RefCell<LocationProfile>, outcome: Outcome) {
    let _ = (profile, outcome);
}

#[scenario(path = "tests/features/evaluation.feature", index = 1)]
fn standard_rent_scores_full_marks(profile: RefCell<LocationProfile>, outcome: Outcome) {
    let _ = (profile, outcome);
}

#[scenario(path = "tests/features/evaluation.feature", index = 2)]
fn amenities_exceed_one_hundred(profile: RefCell<LocationProfile>, outcome: Outcome) {
    let _ = (profile, outcome);
}

#[scenario(path = "tests/features/evaluation.feature", index = 3)]
fn zero_weights_are_rejected(profile: RefCell<LocationProfile>, outcome: Outcome) {
    let _ = (profile, outcome);
}
