//! Composite scoring: weighted overall score, rating, and ROI estimate.

use sitescout_core::{
    DimensionScores, EvaluationResult, LocationProfile, Payback, ProfileError, Rating, RoiEstimate,
    WeightError, WeightVector,
};
use thiserror::Error;

use crate::dimensions::{
    amenities_score, avg_daily_traffic, competition_score, foot_traffic_score, rent_score,
    target_match_score, transportation_score,
};

/// Fraction of daily foot traffic assumed to convert into paying visits.
const CONVERSION_RATE: f64 = 0.1;
/// Trading days per month assumed by the revenue estimate.
const DAYS_PER_MONTH: f64 = 30.0;
/// Assumed fit-out cost in currency units per square metre.
const FIT_OUT_COST_PER_SQM: f64 = 2_000.0;

/// Errors returned by [`evaluate`].
#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    /// The supplied profile failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileError),
    /// The supplied weights could not be normalised.
    #[error(transparent)]
    Weights(#[from] WeightError),
}

/// Score one location across all six dimensions.
///
/// Weights are normalised before use, so callers may pass them on any
/// positive scale. The overall score is the weighted sum of the
/// sub-scores; because the amenities score is unclamped and the
/// competition score can go negative, the overall value is not strictly
/// bounded to 0–100.
///
/// # Errors
/// Returns [`EvaluateError`] when the profile fails validation or the
/// weights cannot be normalised (all-zero sum, negative entries).
pub fn evaluate(
    profile: &LocationProfile,
    weights: &WeightVector,
) -> Result<EvaluationResult, EvaluateError> {
    profile.validate()?;
    let weights = weights.normalise()?;

    let scores = DimensionScores {
        foot_traffic: foot_traffic_score(&profile.traffic),
        rent: rent_score(
            profile.monthly_rent,
            profile.floor_area_sqm,
            Some(profile.city_tier),
        ),
        competition: competition_score(
            profile.competitor_count,
            profile.competitor_distance_m,
            profile.market_saturation,
            profile.competitive_advantage,
        ),
        amenities: amenities_score(
            profile.amenities_completeness,
            profile.residential_density,
            profile.commercial_density,
        ),
        transportation: transportation_score(
            profile.transport_convenience,
            profile.parking_spots,
            profile.transit_stops,
        ),
        target_match: target_match_score(&profile.demographics),
    };

    let overall = overall_score(&scores, &weights);
    let roi = roi_estimate(
        avg_daily_traffic(&profile.traffic),
        profile.monthly_rent,
        profile.floor_area_sqm,
    );

    Ok(EvaluationResult {
        scores,
        overall,
        rating: Rating::for_score(overall),
        roi,
    })
}

/// Weighted sum of sub-scores. The weights must already be normalised.
pub(crate) fn overall_score(scores: &DimensionScores, weights: &WeightVector) -> f64 {
    sitescout_core::Dimension::ALL
        .iter()
        .map(|dimension| scores.score(*dimension) * weights.weight(*dimension))
        .sum()
}

/// Simplified ROI estimate from average daily traffic, rent, and area.
///
/// Revenue assumes a tenth of daily traffic converts over a 30-day month;
/// fit-out cost is 2000 currency units per square metre. Zero or negative
/// profit yields [`Payback::NonRecoverable`] rather than a numeric period.
pub(crate) fn roi_estimate(
    avg_daily_traffic: f64,
    monthly_rent: f64,
    floor_area_sqm: f64,
) -> RoiEstimate {
    let estimated_monthly_revenue = avg_daily_traffic * CONVERSION_RATE * DAYS_PER_MONTH;
    let monthly_profit = estimated_monthly_revenue - monthly_rent;
    let payback = if monthly_profit > 0.0 {
        Payback::Months(floor_area_sqm * FIT_OUT_COST_PER_SQM / monthly_profit)
    } else {
        Payback::NonRecoverable
    };
    RoiEstimate {
        estimated_monthly_revenue,
        monthly_profit,
        payback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sitescout_core::Dimension;

    #[rstest]
    fn sample_profile_evaluates_to_the_expected_overall() {
        let result = evaluate(&LocationProfile::sample(), &WeightVector::default()).unwrap();
        assert!((result.overall - 70.925).abs() < 1e-9);
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(result.scores.foot_traffic, 16.25);
        assert_eq!(result.scores.rent, 100.0);
        assert_eq!(result.scores.competition, 66.0);
        assert_eq!(result.scores.amenities, 145.0);
        assert_eq!(result.scores.transportation, 74.0);
        assert_eq!(result.scores.target_match, 70.0);
    }

    #[rstest]
    fn sample_profile_rent_swallows_revenue() {
        let result = evaluate(&LocationProfile::sample(), &WeightVector::default()).unwrap();
        assert_eq!(result.roi.estimated_monthly_revenue, 4_875.0);
        assert_eq!(result.roi.monthly_profit, -5_125.0);
        assert_eq!(result.roi.payback, Payback::NonRecoverable);
    }

    #[rstest]
    fn profitable_location_reports_a_payback_period() {
        let mut profile = LocationProfile::sample();
        profile.monthly_rent = 2_000.0;
        let result = evaluate(&profile, &WeightVector::default()).unwrap();
        // Profit 2875/month against a 200_000 fit-out.
        match result.roi.payback {
            Payback::Months(months) => assert!((months - 200_000.0 / 2_875.0).abs() < 1e-9),
            Payback::NonRecoverable => panic!("expected a recoverable payback"),
        }
    }

    #[rstest]
    fn raw_weights_are_normalised_before_use() {
        let profile = LocationProfile::sample();
        let baseline = evaluate(&profile, &WeightVector::default()).unwrap();
        let doubled = WeightVector {
            foot_traffic: 0.6,
            rent: 0.4,
            competition: 0.3,
            amenities: 0.3,
            transportation: 0.2,
            target_match: 0.2,
        };
        let result = evaluate(&profile, &doubled).unwrap();
        assert!((result.overall - baseline.overall).abs() < 1e-9);
    }

    #[rstest]
    fn zero_weights_are_rejected() {
        let zeros = WeightVector {
            foot_traffic: 0.0,
            rent: 0.0,
            competition: 0.0,
            amenities: 0.0,
            transportation: 0.0,
            target_match: 0.0,
        };
        let err = evaluate(&LocationProfile::sample(), &zeros).unwrap_err();
        assert_eq!(err, EvaluateError::Weights(WeightError::ZeroSum));
    }

    #[rstest]
    fn invalid_profile_is_rejected() {
        let mut profile = LocationProfile::sample();
        profile.floor_area_sqm = 0.0;
        let err = evaluate(&profile, &WeightVector::default()).unwrap_err();
        assert!(matches!(err, EvaluateError::Profile(_)));
    }

    #[rstest]
    fn overall_is_a_weighted_sum_over_all_dimensions() {
        let result = evaluate(&LocationProfile::sample(), &WeightVector::default()).unwrap();
        let weights = WeightVector::default();
        let expected: f64 = Dimension::ALL
            .iter()
            .map(|d| result.scores.score(*d) * weights.weight(*d))
            .sum();
        assert!((result.overall - expected).abs() < 1e-9);
    }
}
