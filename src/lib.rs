//! Facade crate for the sitescout retail location engine.
//!
//! This crate re-exports the core domain types and exposes the scoring and
//! clustering pipelines behind feature flags.

#![forbid(unsafe_code)]

pub use sitescout_core::{
    CellValue, CityTier, ClusterAssignment, ClusterStats, DemographicMatch, Dimension,
    DimensionScores, DistrictType, EvaluationResult, FeatureStats, LocationProfile, Payback,
    PedestrianType, ProfileError, Rating, RoiEstimate, Row, Table, TrafficCounts, WeightError,
    WeightVector,
};

#[cfg(feature = "scorer")]
pub use sitescout_scorer::{BatchError, EvaluateError, RankedLocation, evaluate, evaluate_batch};

#[cfg(feature = "cluster")]
pub use sitescout_cluster::{
    ClusterError, ClusterReport, KMeansConfig, cluster, min_max_normalise,
};
