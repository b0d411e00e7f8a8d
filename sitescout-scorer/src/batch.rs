//! Batch evaluation over tabular location data.
//!
//! Batch input carries a reduced column set, so three dimensions diverge
//! from the single-evaluation formulas: amenities drops the density terms,
//! transportation drops the parking and transit terms, and target match is
//! a fixed constant. The divergence is part of the model definition and is
//! kept as a separate code path; do not fold the two modes together.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sitescout_core::{
    CityTier, Dimension, DimensionScores, EvaluationResult, Rating, Row, Table, TrafficCounts,
    WeightError, WeightVector,
};
use thiserror::Error;

use crate::composite::{overall_score, roi_estimate};
use crate::dimensions::{avg_daily_traffic, competition_score, foot_traffic_score, rent_score};

/// Canonical column names for batch input tables.
pub mod columns {
    /// Stable record identifier.
    pub const LOCATION_NAME: &str = "location_name";
    /// City tier label; unrecognised values fall back to the 200 baseline.
    pub const CITY_TIER: &str = "city_tier";
    /// Business-district type.
    pub const DISTRICT_TYPE: &str = "district_type";
    /// Floor area in square metres.
    pub const FLOOR_AREA_SQM: &str = "floor_area_sqm";
    /// Monthly rent.
    pub const MONTHLY_RENT: &str = "monthly_rent";
    /// Morning peak count.
    pub const MORNING_PEAK: &str = "morning_peak";
    /// Afternoon peak count.
    pub const AFTERNOON_PEAK: &str = "afternoon_peak";
    /// Evening peak count.
    pub const EVENING_PEAK: &str = "evening_peak";
    /// Weekend average count.
    pub const WEEKEND_TRAFFIC: &str = "weekend_traffic";
    /// Holiday average count.
    pub const HOLIDAY_TRAFFIC: &str = "holiday_traffic";
    /// Direct competitor count.
    pub const COMPETITOR_COUNT: &str = "competitor_count";
    /// Distance to the nearest competitor in metres.
    pub const COMPETITOR_DISTANCE_M: &str = "competitor_distance_m";
    /// Market saturation, 0–100.
    pub const MARKET_SATURATION: &str = "market_saturation";
    /// Competitive advantage, 0–100.
    pub const COMPETITIVE_ADVANTAGE: &str = "competitive_advantage";
    /// Transport convenience, 0–10.
    pub const TRANSPORT_CONVENIENCE: &str = "transport_convenience";
    /// Amenities completeness, 0–10.
    pub const AMENITIES_COMPLETENESS: &str = "amenities_completeness";

    /// Every column batch evaluation requires, in reporting order.
    ///
    /// The weekend and holiday columns are required even though no formula
    /// consumes them; the contract follows the source template.
    pub const REQUIRED: [&str; 16] = [
        LOCATION_NAME,
        CITY_TIER,
        DISTRICT_TYPE,
        FLOOR_AREA_SQM,
        MONTHLY_RENT,
        MORNING_PEAK,
        AFTERNOON_PEAK,
        EVENING_PEAK,
        WEEKEND_TRAFFIC,
        HOLIDAY_TRAFFIC,
        COMPETITOR_COUNT,
        COMPETITOR_DISTANCE_M,
        MARKET_SATURATION,
        COMPETITIVE_ADVANTAGE,
        TRANSPORT_CONVENIENCE,
        AMENITIES_COMPLETENESS,
    ];
}

/// Target-match score assumed when batch input carries no demographic data.
const BATCH_TARGET_MATCH: f64 = 70.0;
/// Sub-scores strictly above this are strengths.
const STRENGTH_THRESHOLD: f64 = 80.0;
/// Sub-scores strictly below this are weaknesses.
const WEAKNESS_THRESHOLD: f64 = 60.0;

/// Strength and weakness phrasing for the five comparable dimensions.
///
/// Target match is excluded: its batch value is a constant and says
/// nothing about the location.
const ASSESSMENTS: [(Dimension, &str, &str); 5] = [
    (
        Dimension::FootTraffic,
        "ample foot traffic",
        "insufficient foot traffic",
    ),
    (Dimension::Rent, "reasonable rent cost", "high rent cost"),
    (
        Dimension::Competition,
        "light competitive pressure",
        "heavy competitive pressure",
    ),
    (
        Dimension::Amenities,
        "complete surrounding amenities",
        "sparse surrounding amenities",
    ),
    (
        Dimension::Transportation,
        "convenient transport access",
        "poor transport access",
    ),
];

/// Errors returned by [`evaluate_batch`].
#[derive(Debug, Error, PartialEq)]
pub enum BatchError {
    /// The table lacks required columns; no partial result is produced.
    #[error("batch input is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// The exact missing column names, in reporting order.
        columns: Vec<String>,
    },
    /// A cell held the wrong type or an unusable value.
    #[error("row {row}: column {column} holds an unusable value")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Offending column name.
        column: &'static str,
    },
    /// The supplied weights could not be normalised.
    #[error(transparent)]
    Weights(#[from] WeightError),
}

/// One ranked batch entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLocation {
    /// Location name from the input row.
    pub name: String,
    /// Full evaluation for the row.
    pub result: EvaluationResult,
    /// Dimensions scoring above the strength threshold, as phrases.
    pub strengths: BTreeSet<String>,
    /// Dimensions scoring below the weakness threshold, as phrases.
    pub weaknesses: BTreeSet<String>,
}

/// Score, rank, and classify every row of a batch table.
///
/// Rows are ranked by descending overall score; the sort is stable, so
/// equal scores keep their input order. Scores use the batch formula set
/// and are not comparable with single-evaluation results.
///
/// # Errors
/// Returns [`BatchError::MissingColumns`] naming every absent required
/// column before any row is scored, [`BatchError::InvalidCell`] for a
/// non-numeric or out-of-domain cell, and weight errors unchanged.
pub fn evaluate_batch(
    table: &Table,
    weights: &WeightVector,
) -> Result<Vec<RankedLocation>, BatchError> {
    let missing = table.missing_columns(&columns::REQUIRED);
    if !missing.is_empty() {
        return Err(BatchError::MissingColumns { columns: missing });
    }
    let weights = weights.normalise()?;

    let mut ranked: Vec<RankedLocation> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| score_row(index, row, &weights))
        .collect::<Result<_, _>>()?;

    ranked.sort_by(|lhs, rhs| {
        rhs.result
            .overall
            .partial_cmp(&lhs.result.overall)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(ranked)
}

fn score_row(
    index: usize,
    row: &Row,
    weights: &WeightVector,
) -> Result<RankedLocation, BatchError> {
    let name = row
        .text(columns::LOCATION_NAME)
        .ok_or(BatchError::InvalidCell {
            row: index,
            column: columns::LOCATION_NAME,
        })?
        .to_owned();
    // Unrecognised tier labels score against the fallback baseline.
    let tier: Option<CityTier> = row
        .text(columns::CITY_TIER)
        .and_then(|label| label.parse().ok());

    let traffic = TrafficCounts {
        morning_peak: count_cell(index, row, columns::MORNING_PEAK)?,
        afternoon_peak: count_cell(index, row, columns::AFTERNOON_PEAK)?,
        evening_peak: count_cell(index, row, columns::EVENING_PEAK)?,
        weekend: count_cell(index, row, columns::WEEKEND_TRAFFIC)?,
        holiday: count_cell(index, row, columns::HOLIDAY_TRAFFIC)?,
    };
    let floor_area_sqm = number_cell(index, row, columns::FLOOR_AREA_SQM)?;
    if floor_area_sqm <= 0.0 {
        return Err(BatchError::InvalidCell {
            row: index,
            column: columns::FLOOR_AREA_SQM,
        });
    }
    let monthly_rent = number_cell(index, row, columns::MONTHLY_RENT)?;

    let scores = DimensionScores {
        foot_traffic: foot_traffic_score(&traffic),
        rent: rent_score(monthly_rent, floor_area_sqm, tier),
        competition: competition_score(
            count_cell(index, row, columns::COMPETITOR_COUNT)?,
            number_cell(index, row, columns::COMPETITOR_DISTANCE_M)?,
            number_cell(index, row, columns::MARKET_SATURATION)?,
            number_cell(index, row, columns::COMPETITIVE_ADVANTAGE)?,
        ),
        // Reduced column set: completeness only, no density terms.
        amenities: number_cell(index, row, columns::AMENITIES_COMPLETENESS)? * 10.0,
        // Reduced column set: convenience only, no parking or transit terms.
        transportation: number_cell(index, row, columns::TRANSPORT_CONVENIENCE)? * 10.0,
        target_match: BATCH_TARGET_MATCH,
    };

    let overall = overall_score(&scores, weights);
    let (strengths, weaknesses) = classify(&scores);

    Ok(RankedLocation {
        name,
        result: EvaluationResult {
            scores,
            overall,
            rating: Rating::for_score(overall),
            roi: roi_estimate(avg_daily_traffic(&traffic), monthly_rent, floor_area_sqm),
        },
        strengths,
        weaknesses,
    })
}

/// Classify the five comparable dimensions into strength/weakness phrases.
///
/// Scores strictly between the thresholds (inclusive boundaries) are
/// neither and omitted.
fn classify(scores: &DimensionScores) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut strengths = BTreeSet::new();
    let mut weaknesses = BTreeSet::new();
    for (dimension, strength, weakness) in ASSESSMENTS {
        let score = scores.score(dimension);
        if score > STRENGTH_THRESHOLD {
            strengths.insert(strength.to_owned());
        } else if score < WEAKNESS_THRESHOLD {
            weaknesses.insert(weakness.to_owned());
        }
    }
    (strengths, weaknesses)
}

fn number_cell(index: usize, row: &Row, column: &'static str) -> Result<f64, BatchError> {
    row.number(column)
        .filter(|value| value.is_finite())
        .ok_or(BatchError::InvalidCell { row: index, column })
}

/// Read a non-negative integer count stored as a JSON number.
fn count_cell(index: usize, row: &Row, column: &'static str) -> Result<u32, BatchError> {
    let value = number_cell(index, row, column)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(BatchError::InvalidCell { row: index, column });
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range and integrality checked above"
    )]
    let count = value as u32;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row_json(name: &str, rent: f64) -> String {
        format!(
            r#"{{
                "location_name": "{name}",
                "city_tier": "tier1",
                "district_type": "core",
                "floor_area_sqm": 100,
                "monthly_rent": {rent},
                "morning_peak": 1200,
                "afternoon_peak": 1800,
                "evening_peak": 2500,
                "weekend_traffic": 3000,
                "holiday_traffic": 3500,
                "competitor_count": 3,
                "competitor_distance_m": 200,
                "market_saturation": 60,
                "competitive_advantage": 70,
                "transport_convenience": 8,
                "amenities_completeness": 9
            }}"#
        )
    }

    fn table_of(rows: &[String]) -> Table {
        serde_json::from_str(&format!("[{}]", rows.join(","))).unwrap()
    }

    #[rstest]
    fn missing_columns_are_reported_exactly() {
        let table: Table = serde_json::from_str(
            r#"[{"location_name": "A", "city_tier": "tier1", "monthly_rent": 1}]"#,
        )
        .unwrap();
        let err = evaluate_batch(&table, &WeightVector::default()).unwrap_err();
        match err {
            BatchError::MissingColumns { columns: missing } => {
                assert_eq!(missing.first().map(String::as_str), Some("district_type"));
                assert_eq!(missing.len(), columns::REQUIRED.len() - 3);
                assert!(!missing.contains(&"monthly_rent".to_owned()));
            }
            other => panic!("expected MissingColumns, found {other:?}"),
        }
    }

    #[rstest]
    fn dropping_one_column_names_exactly_that_column() {
        let mut row: serde_json::Value = serde_json::from_str(&row_json("A", 15_000.0)).unwrap();
        row.as_object_mut().unwrap().remove("weekend_traffic");
        let table: Table = serde_json::from_value(serde_json::Value::Array(vec![row])).unwrap();
        let err = evaluate_batch(&table, &WeightVector::default()).unwrap_err();
        assert_eq!(
            err,
            BatchError::MissingColumns {
                columns: vec!["weekend_traffic".to_owned()]
            }
        );
    }

    #[rstest]
    fn batch_uses_the_reduced_formulas() {
        let table = table_of(&[row_json("A", 15_000.0)]);
        let ranked = evaluate_batch(&table, &WeightVector::default()).unwrap();
        let entry = ranked.first().unwrap();
        // completeness*10 and convenience*10, not the single-mode forms.
        assert_eq!(entry.result.scores.amenities, 90.0);
        assert_eq!(entry.result.scores.transportation, 80.0);
        assert_eq!(entry.result.scores.target_match, BATCH_TARGET_MATCH);
        assert_eq!(entry.result.scores.foot_traffic, 20.0);
        assert_eq!(entry.result.scores.competition, 65.0);
        assert!((entry.result.overall - 64.25).abs() < 1e-9);
    }

    #[rstest]
    fn lower_rent_ranks_higher_all_else_equal() {
        // Rents chosen above the tier1 standard so the scores differ.
        let table = table_of(&[row_json("dear", 80_000.0), row_json("cheap", 60_000.0)]);
        let ranked = evaluate_batch(&table, &WeightVector::default()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["cheap", "dear"]);
    }

    #[rstest]
    fn equal_scores_keep_input_order() {
        let table = table_of(&[
            row_json("first", 15_000.0),
            row_json("second", 15_000.0),
            row_json("third", 15_000.0),
        ]);
        let ranked = evaluate_batch(&table, &WeightVector::default()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[rstest]
    fn strengths_and_weaknesses_use_strict_thresholds() {
        let table = table_of(&[row_json("A", 15_000.0)]);
        let ranked = evaluate_batch(&table, &WeightVector::default()).unwrap();
        let entry = ranked.first().unwrap();
        // rent 100 and amenities 90 exceed 80; foot traffic 20 is below 60;
        // transportation sits exactly on 80 and must be neither.
        assert!(entry.strengths.contains("reasonable rent cost"));
        assert!(entry.strengths.contains("complete surrounding amenities"));
        assert!(entry.weaknesses.contains("insufficient foot traffic"));
        assert!(!entry.strengths.contains("convenient transport access"));
        assert!(!entry.weaknesses.contains("poor transport access"));
    }

    #[rstest]
    fn unknown_tier_falls_back_instead_of_failing() {
        let row = row_json("A", 15_000.0).replace("tier1", "hamlet");
        let table = table_of(&[row]);
        let ranked = evaluate_batch(&table, &WeightVector::default()).unwrap();
        // 150 per m² against the 200 fallback baseline scores 100 capped.
        assert_eq!(ranked.first().unwrap().result.scores.rent, 100.0);
    }

    #[rstest]
    fn non_numeric_cell_is_rejected_with_position() {
        let row = row_json("A", 15_000.0).replace("\"floor_area_sqm\": 100", "\"floor_area_sqm\": \"big\"");
        let table = table_of(&[row]);
        let err = evaluate_batch(&table, &WeightVector::default()).unwrap_err();
        assert_eq!(
            err,
            BatchError::InvalidCell {
                row: 0,
                column: columns::FLOOR_AREA_SQM
            }
        );
    }

    #[rstest]
    fn empty_table_yields_empty_rankings() {
        let ranked = evaluate_batch(&Table::default(), &WeightVector::default()).unwrap();
        assert!(ranked.is_empty());
    }
}
