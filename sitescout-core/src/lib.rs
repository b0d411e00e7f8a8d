//! Core domain types for the sitescout engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors and `validate` methods return `Result` to surface
//! invalid input early; once built, values are treated as immutable by the
//! scoring and clustering pipelines.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cluster;
mod dimension;
mod profile;
mod score;
mod table;
mod tier;
mod weights;

pub use cluster::{ClusterAssignment, ClusterStats, FeatureStats};
pub use dimension::Dimension;
pub use profile::{
    DemographicMatch, DistrictType, LocationProfile, PedestrianType, ProfileError, TrafficCounts,
};
pub use score::{DimensionScores, EvaluationResult, Payback, Rating, RoiEstimate};
pub use table::{CellValue, Row, Table};
pub use tier::CityTier;
pub use weights::{WeightError, WeightVector};
