//! Per-cluster statistics and rule-based siting suggestions.
//!
//! Suggestion inference is feature-name-driven: only the four recognised
//! feature names below ever generate guidance, by comparing the cluster's
//! mean against the global median of the same feature. Unrecognised
//! features contribute statistics but no prose.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sitescout_core::{ClusterAssignment, ClusterStats, FeatureStats};

/// Above-median and below-median phrasing per recognised feature name.
const SUGGESTION_RULES: [(&str, &str, &str); 4] = [
    (
        "foot_traffic",
        "strong footfall; suits formats that depend on walk-in volume",
        "lighter footfall; suits destination or boutique formats",
    ),
    (
        "rent_per_sqm",
        "high rent base; favours high-margin trades",
        "moderate rent base; lower operating pressure",
    ),
    (
        "competitor_count",
        "crowded competitive field; a clear differentiator is needed",
        "light competition; room to capture the market",
    ),
    (
        "transport_convenience",
        "well connected; can draw customers from a wide radius",
        "average connectivity; will serve the immediate catchment",
    ),
];

/// Full output of the clustering pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    /// Record identifier to cluster index.
    pub assignment: ClusterAssignment,
    /// Descriptive statistics per cluster index.
    pub stats: BTreeMap<usize, ClusterStats>,
    /// Generated guidance per cluster index; may be empty when no
    /// recognised feature was selected.
    pub suggestions: BTreeMap<usize, Vec<String>>,
}

/// Derive statistics and suggestions from a finished partition.
///
/// Statistics and median comparisons run over the raw feature matrix, not
/// the normalised one. An emptied cluster reports a zero count with no
/// feature statistics or suggestions.
pub(crate) fn analyse(
    names: &[String],
    features: &[String],
    matrix: &[Vec<f64>],
    assignments: &[usize],
    k: usize,
) -> ClusterReport {
    let medians: Vec<f64> = (0..features.len())
        .map(|index| median(&column(matrix, index)))
        .collect();

    let mut stats = BTreeMap::new();
    let mut suggestions = BTreeMap::new();
    for cluster in 0..k {
        let members: Vec<&Vec<f64>> = matrix
            .iter()
            .zip(assignments)
            .filter(|(_, assigned)| **assigned == cluster)
            .map(|(row, _)| row)
            .collect();

        let mut feature_stats = BTreeMap::new();
        let mut cluster_suggestions = Vec::new();
        if !members.is_empty() {
            for (index, feature) in features.iter().enumerate() {
                let values: Vec<f64> = members
                    .iter()
                    .filter_map(|row| row.get(index))
                    .copied()
                    .collect();
                let cluster_mean = mean(&values);
                feature_stats.insert(
                    feature.clone(),
                    FeatureStats {
                        mean: cluster_mean,
                        std_dev: std_dev(&values, cluster_mean),
                    },
                );
                if let Some((_, above, below)) = SUGGESTION_RULES
                    .iter()
                    .find(|(name, _, _)| name == feature)
                {
                    let global_median = medians.get(index).copied().unwrap_or(0.0);
                    let phrase = if cluster_mean > global_median {
                        *above
                    } else {
                        *below
                    };
                    cluster_suggestions.push(phrase.to_owned());
                }
            }
        }
        stats.insert(
            cluster,
            ClusterStats {
                count: members.len(),
                features: feature_stats,
            },
        );
        suggestions.insert(cluster, cluster_suggestions);
    }

    let assignment = ClusterAssignment::from_pairs(
        names
            .iter()
            .cloned()
            .zip(assignments.iter().copied()),
    );
    ClusterReport {
        assignment,
        stats,
        suggestions,
    }
}

fn column(matrix: &[Vec<f64>], index: usize) -> Vec<f64> {
    matrix
        .iter()
        .filter_map(|row| row.get(index))
        .copied()
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "descriptive statistics divide bounded sums by small counts"
)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1); 0 for fewer than two values.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "descriptive statistics divide bounded sums by small counts"
)]
fn std_dev(values: &[f64], mean_value: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_of_squares: f64 = values
        .iter()
        .map(|value| (value - mean_value).powi(2))
        .sum();
    (sum_of_squares / (values.len() - 1) as f64).sqrt()
}

/// Median of a column; the mean of the two middle values for even counts.
#[expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "median indexes a sorted copy at checked midpoints"
)]
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|lhs, rhs| lhs.partial_cmp(rhs).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
