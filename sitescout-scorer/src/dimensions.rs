//! The six dimension scoring functions.
//!
//! Each function maps the relevant subset of a location's raw attributes
//! to a sub-score. Scores are nominally 0–100 but the model carries two
//! deliberate asymmetries inherited from its definition: the amenities
//! score has no upper clamp, and the competition score has no lower clamp
//! (its count term goes negative past ten competitors). Both are contract,
//! not defects to correct here.

use sitescout_core::{CityTier, DemographicMatch, TrafficCounts};

/// Weighted average of the daily peak counts.
///
/// The evening peak is double-weighted as the highest-conversion window.
pub fn avg_daily_traffic(traffic: &TrafficCounts) -> f64 {
    (f64::from(traffic.morning_peak)
        + f64::from(traffic.afternoon_peak)
        + 2.0 * f64::from(traffic.evening_peak))
        / 4.0
}

/// Foot-traffic sub-score: `min(100, avg_daily / 100)`.
///
/// Monotonically non-decreasing in each peak count; never negative for
/// non-negative inputs, so no lower clamp is applied.
pub fn foot_traffic_score(traffic: &TrafficCounts) -> f64 {
    (avg_daily_traffic(traffic) / 100.0).min(100.0)
}

/// Rent sub-score against the city-tier baseline.
///
/// Scores exactly 100 when rent per square metre is at or below the
/// tier's standard and decreases linearly as rent rises above it, clamped
/// to 0–100. An unrecognised tier uses the 200 fallback baseline.
pub fn rent_score(monthly_rent: f64, floor_area_sqm: f64, tier: Option<CityTier>) -> f64 {
    let rent_per_sqm = monthly_rent / floor_area_sqm;
    let standard = CityTier::rent_standard_or_default(tier);
    (100.0 - (rent_per_sqm - standard) / standard * 100.0).clamp(0.0, 100.0)
}

/// Competition sub-score.
///
/// Fewer competitors, greater distance, lower saturation, and higher
/// advantage all score better. Upper-clamped to 100 only: with more than
/// ten competitors the count term is negative and the total may drop
/// below zero.
pub fn competition_score(
    competitor_count: u32,
    competitor_distance_m: f64,
    market_saturation: f64,
    competitive_advantage: f64,
) -> f64 {
    let score = (10.0 - f64::from(competitor_count)) * 5.0
        + (competitor_distance_m / 10.0).min(100.0) * 0.2
        + (100.0 - market_saturation) * 0.3
        + competitive_advantage * 0.2;
    score.min(100.0)
}

/// Amenities sub-score (single-evaluation mode).
///
/// No clamp is applied: completeness 10 with dense surroundings scores
/// 200. The asymmetry with the clamped sibling dimensions is inherited
/// from the model definition and preserved exactly.
pub fn amenities_score(completeness: f64, residential_density: f64, commercial_density: f64) -> f64 {
    completeness * 10.0 + residential_density * 5.0 + commercial_density * 5.0
}

/// Transportation sub-score, upper-clamped to 100.
///
/// Parking contributes at most 20 points (counts above 100 saturate).
pub fn transportation_score(convenience: f64, parking_spots: u32, transit_stops: u32) -> f64 {
    let score = convenience * 7.0
        + f64::from(parking_spots).min(100.0) * 0.2
        + f64::from(transit_stops) * 5.0;
    score.min(100.0)
}

/// Target-match sub-score.
///
/// Each of the four 0–10 sub-scores contributes an equal 25-point share,
/// bounding the result to 0–100.
pub fn target_match_score(demographics: &DemographicMatch) -> f64 {
    (demographics.demographic
        + demographics.age_group
        + demographics.income_level
        + demographics.consumer_behaviour)
        / 10.0
        * 25.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn traffic(morning: u32, afternoon: u32, evening: u32) -> TrafficCounts {
        TrafficCounts {
            morning_peak: morning,
            afternoon_peak: afternoon,
            evening_peak: evening,
            weekend: 0,
            holiday: 0,
        }
    }

    #[rstest]
    fn evening_peak_is_double_weighted() {
        assert_eq!(avg_daily_traffic(&traffic(1_000, 1_500, 2_000)), 1_625.0);
    }

    #[rstest]
    fn foot_traffic_scales_avg_daily_by_one_hundred() {
        assert_eq!(foot_traffic_score(&traffic(1_000, 1_500, 2_000)), 16.25);
    }

    #[rstest]
    fn foot_traffic_saturates_at_one_hundred() {
        assert_eq!(foot_traffic_score(&traffic(10_000, 10_000, 10_000)), 100.0);
    }

    #[rstest]
    fn rent_at_standard_scores_exactly_one_hundred() {
        // 50_000 / 100 m² = 500 per m², the tier1 standard.
        assert_eq!(rent_score(50_000.0, 100.0, Some(CityTier::Tier1)), 100.0);
    }

    #[rstest]
    fn rent_below_standard_still_scores_one_hundred() {
        assert_eq!(rent_score(10_000.0, 100.0, Some(CityTier::Tier1)), 100.0);
    }

    #[rstest]
    #[case(600.0, 80.0)]
    #[case(750.0, 50.0)]
    #[case(1_000.0, 0.0)]
    fn rent_above_standard_decreases_linearly(#[case] rent_per_sqm: f64, #[case] expected: f64) {
        let score = rent_score(rent_per_sqm * 100.0, 100.0, Some(CityTier::Tier1));
        assert!((score - expected).abs() < 1e-9);
    }

    #[rstest]
    fn rent_with_unknown_tier_uses_fallback_standard() {
        // 200 per m² matches the fallback baseline exactly.
        assert_eq!(rent_score(20_000.0, 100.0, None), 100.0);
    }

    #[rstest]
    fn competition_count_term_zeroes_at_ten_competitors() {
        // Distance, saturation, and advantage chosen to contribute nothing.
        assert_eq!(competition_score(10, 0.0, 100.0, 0.0), 0.0);
    }

    #[rstest]
    fn competition_goes_negative_past_ten_competitors() {
        // Regression pin: the count term is deliberately unclamped below.
        assert_eq!(competition_score(15, 0.0, 100.0, 0.0), -25.0);
    }

    #[rstest]
    fn competition_is_capped_at_one_hundred() {
        assert_eq!(competition_score(0, 5_000.0, 0.0, 100.0), 100.0);
    }

    #[rstest]
    fn amenities_is_deliberately_unclamped() {
        assert_eq!(amenities_score(10.0, 10.0, 10.0), 200.0);
    }

    #[rstest]
    fn transportation_is_capped_at_one_hundred() {
        assert_eq!(transportation_score(10.0, 500, 10), 100.0);
    }

    #[rstest]
    fn transportation_parking_contribution_saturates() {
        let sparse = transportation_score(0.0, 100, 0);
        let dense = transportation_score(0.0, 400, 0);
        assert_eq!(sparse, 20.0);
        assert_eq!(dense, 20.0);
    }

    #[rstest]
    fn target_match_gives_each_sub_score_a_quarter_share() {
        let demographics = DemographicMatch {
            demographic: 8.0,
            age_group: 7.0,
            income_level: 6.0,
            consumer_behaviour: 7.0,
        };
        assert_eq!(target_match_score(&demographics), 70.0);
    }

    #[rstest]
    fn target_match_is_bounded_to_one_hundred() {
        let demographics = DemographicMatch {
            demographic: 10.0,
            age_group: 10.0,
            income_level: 10.0,
            consumer_behaviour: 10.0,
        };
        assert_eq!(target_match_score(&demographics), 100.0);
    }
}
