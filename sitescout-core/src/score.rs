//! Evaluation outputs: per-dimension scores, ratings, and ROI estimates.

use serde::{Deserialize, Serialize};

use crate::Dimension;

/// The six sub-scores produced for one location.
///
/// Scores are nominally on a 0–100 scale, but the amenities score is
/// deliberately unclamped and the competition score can fall below zero
/// with more than ten competitors; see the scoring documentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Foot-traffic sub-score.
    pub foot_traffic: f64,
    /// Rent sub-score.
    pub rent: f64,
    /// Competition sub-score.
    pub competition: f64,
    /// Amenities sub-score.
    pub amenities: f64,
    /// Transportation sub-score.
    pub transportation: f64,
    /// Target-match sub-score.
    pub target_match: f64,
}

impl DimensionScores {
    /// Return the sub-score for one dimension.
    pub fn score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::FootTraffic => self.foot_traffic,
            Dimension::Rent => self.rent,
            Dimension::Competition => self.competition,
            Dimension::Amenities => self.amenities,
            Dimension::Transportation => self.transportation,
            Dimension::TargetMatch => self.target_match,
        }
    }
}

/// Recommendation band derived from the overall score.
///
/// # Examples
/// ```
/// use sitescout_core::Rating;
///
/// assert_eq!(Rating::for_score(80.0), Rating::Excellent);
/// assert_eq!(Rating::for_score(79.9), Rating::Good);
/// assert_eq!(Rating::for_score(59.9), Rating::NotRecommended);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// Overall score of 80 or above.
    Excellent,
    /// Overall score of 70 or above.
    Good,
    /// Overall score of 60 or above.
    Fair,
    /// Anything below 60.
    NotRecommended,
}

impl Rating {
    /// Band an overall score. Lower bounds are inclusive.
    pub fn for_score(overall: f64) -> Self {
        if overall >= 80.0 {
            Self::Excellent
        } else if overall >= 70.0 {
            Self::Good
        } else if overall >= 60.0 {
            Self::Fair
        } else {
            Self::NotRecommended
        }
    }

    /// Return the rating as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NotRecommended => "not-recommended",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fit-out payback outlook for a location.
///
/// `NonRecoverable` is a valid evaluation outcome, not an error: with zero
/// or negative monthly profit the payback period is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "months")]
pub enum Payback {
    /// Months until cumulative profit covers the fit-out cost.
    Months(f64),
    /// Profit is zero or negative; the outlay is never recovered.
    NonRecoverable,
}

impl Payback {
    /// Whether the payback period is defined.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Months(_))
    }
}

/// Simplified return-on-investment estimate for one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    /// Estimated monthly revenue in currency units.
    pub estimated_monthly_revenue: f64,
    /// Estimated monthly profit after rent.
    pub monthly_profit: f64,
    /// Payback outlook for the assumed fit-out cost.
    pub payback: Payback,
}

/// The full result of evaluating one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Per-dimension sub-scores.
    pub scores: DimensionScores,
    /// Weighted overall score.
    pub overall: f64,
    /// Recommendation band for the overall score.
    pub rating: Rating,
    /// Simplified ROI estimate.
    pub roi: RoiEstimate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, Rating::Excellent)]
    #[case(80.0, Rating::Excellent)]
    #[case(79.999, Rating::Good)]
    #[case(70.0, Rating::Good)]
    #[case(69.999, Rating::Fair)]
    #[case(60.0, Rating::Fair)]
    #[case(59.999, Rating::NotRecommended)]
    #[case(-5.0, Rating::NotRecommended)]
    fn rating_bands_have_inclusive_lower_bounds(#[case] score: f64, #[case] expected: Rating) {
        assert_eq!(Rating::for_score(score), expected);
    }

    #[rstest]
    fn payback_serialises_with_a_kind_tag() {
        let months = serde_json::to_value(Payback::Months(12.5)).unwrap();
        assert_eq!(months["kind"], "months");
        assert_eq!(months["months"], 12.5);

        let lost = serde_json::to_value(Payback::NonRecoverable).unwrap();
        assert_eq!(lost["kind"], "non-recoverable");
        assert!(!Payback::NonRecoverable.is_recoverable());
    }

    #[rstest]
    fn scores_look_up_by_dimension() {
        let scores = DimensionScores {
            foot_traffic: 1.0,
            rent: 2.0,
            competition: 3.0,
            amenities: 4.0,
            transportation: 5.0,
            target_match: 6.0,
        };
        assert_eq!(scores.score(Dimension::FootTraffic), 1.0);
        assert_eq!(scores.score(Dimension::TargetMatch), 6.0);
    }
}
