//! Scoring pipeline for candidate retail locations.
//!
//! The crate provides two complementary capabilities:
//! - **Single evaluation** scores one [`LocationProfile`](sitescout_core::LocationProfile)
//!   across six weighted dimensions and derives a simplified ROI estimate;
//!   see [`evaluate`].
//! - **Batch evaluation** scores a [`Table`](sitescout_core::Table) of
//!   locations with the reduced column set, ranks them, and classifies
//!   each location's relative strengths and weaknesses; see
//!   [`evaluate_batch`].
//!
//! The two modes deliberately diverge: batch input lacks the density,
//! parking, transit, and demographic columns, so its amenities,
//! transportation, and target-match scores follow simplified formulas.
//! Results from the two modes are not directly comparable.
//!
//! # Examples
//!
//! ```
//! use sitescout_core::{LocationProfile, Rating, WeightVector};
//! use sitescout_scorer::evaluate;
//!
//! let profile = LocationProfile::sample();
//! let result = evaluate(&profile, &WeightVector::default())?;
//! assert_eq!(result.rating, Rating::Good);
//! # Ok::<(), sitescout_scorer::EvaluateError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod batch;
mod composite;
mod dimensions;

pub use batch::{BatchError, RankedLocation, columns, evaluate_batch};
pub use composite::{EvaluateError, evaluate};
pub use dimensions::{
    amenities_score, avg_daily_traffic, competition_score, foot_traffic_score, rent_score,
    target_match_score, transportation_score,
};
