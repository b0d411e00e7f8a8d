//! Error types raised by the clustering pipeline.

use thiserror::Error;

/// Errors raised while preparing or partitioning a feature table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    /// The table holds no rows.
    #[error("feature table is empty")]
    EmptyTable,
    /// The requested cluster count is outside `2..=record count`.
    #[error("cluster count {k} must be between 2 and the record count {records}")]
    InvalidClusterCount {
        /// Requested number of clusters.
        k: usize,
        /// Number of records available.
        records: usize,
    },
    /// A selected feature column is absent from a row.
    #[error("selected feature '{feature}' is not present in the table")]
    UnknownFeature {
        /// Name of the missing feature.
        feature: String,
    },
    /// A selected feature held a non-numeric or non-finite cell.
    #[error("row {row}: feature '{feature}' holds a non-numeric value")]
    NonNumericCell {
        /// Zero-based row index.
        row: usize,
        /// Offending feature name.
        feature: String,
    },
    /// A row lacks the `location_name` identifier.
    #[error("row {row} has no location_name identifier")]
    MissingIdentifier {
        /// Zero-based row index.
        row: usize,
    },
}
