//! Clustering pipeline for discovering latent location archetypes.
//!
//! The pipeline runs in three stages over a row-oriented
//! [`Table`](sitescout_core::Table):
//! - [`min_max_normalise`] scales each selected feature column into
//!   `0.0..=1.0` so no feature dominates the distance metric;
//! - a seeded, bounded k-means loop partitions the records into `k`
//!   groups, reproducibly for a given seed;
//! - [`cluster`] derives per-cluster descriptive statistics over the raw
//!   values and emits rule-based suggestions by comparing cluster means
//!   against global medians for a small set of recognised feature names.
//!
//! # Examples
//!
//! ```
//! use sitescout_cluster::{KMeansConfig, cluster};
//! use sitescout_core::Table;
//!
//! let table: Table = serde_json::from_str(
//!     r#"[
//!         {"location_name": "A", "foot_traffic": 4500},
//!         {"location_name": "B", "foot_traffic": 4400},
//!         {"location_name": "C", "foot_traffic": 600},
//!         {"location_name": "D", "foot_traffic": 500}
//!     ]"#,
//! )?;
//! let report = cluster(
//!     &table,
//!     &["foot_traffic".to_owned()],
//!     &KMeansConfig::with_k(2),
//! )?;
//! assert_ne!(
//!     report.assignment.cluster_of("A"),
//!     report.assignment.cluster_of("D"),
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod engine;
mod error;
mod normalise;

pub use analysis::ClusterReport;
pub use engine::KMeansConfig;
pub use error::ClusterError;
pub use normalise::min_max_normalise;

use sitescout_core::Table;

/// Column holding the stable record identifier.
const IDENTIFIER_COLUMN: &str = "location_name";

/// Partition a table into `k` clusters and describe each group.
///
/// `features` selects the numeric columns fed to the distance metric, in
/// caller order. Statistics and median comparisons use the raw values;
/// normalisation only affects the partitioning itself.
///
/// # Errors
/// Returns [`ClusterError`] when the table is empty, `k` is outside
/// `2..=record count`, a selected feature is absent or non-numeric, or a
/// row lacks the `location_name` identifier.
pub fn cluster(
    table: &Table,
    features: &[String],
    config: &KMeansConfig,
) -> Result<ClusterReport, ClusterError> {
    let (names, matrix) = extract_features(table, features)?;
    let scaled = min_max_normalise(&matrix);
    let assignments = engine::run(&scaled, config)?;
    Ok(analysis::analyse(
        &names,
        features,
        &matrix,
        &assignments,
        config.k,
    ))
}

/// Pull the identifier column and the selected feature matrix out of a table.
fn extract_features(
    table: &Table,
    features: &[String],
) -> Result<(Vec<String>, Vec<Vec<f64>>), ClusterError> {
    if table.is_empty() {
        return Err(ClusterError::EmptyTable);
    }
    let mut names = Vec::with_capacity(table.len());
    let mut matrix = Vec::with_capacity(table.len());
    for (index, row) in table.rows().iter().enumerate() {
        let name = row
            .text(IDENTIFIER_COLUMN)
            .ok_or(ClusterError::MissingIdentifier { row: index })?;
        let mut values = Vec::with_capacity(features.len());
        for feature in features {
            if !row.contains(feature) {
                return Err(ClusterError::UnknownFeature {
                    feature: feature.clone(),
                });
            }
            let value = row
                .number(feature)
                .filter(|value| value.is_finite())
                .ok_or_else(|| ClusterError::NonNumericCell {
                    row: index,
                    feature: feature.clone(),
                })?;
            values.push(value);
        }
        names.push(name.to_owned());
        matrix.push(values);
    }
    Ok((names, matrix))
}
