//! Dimension weights and their normalisation.
//!
//! Raw weights may be supplied on any positive scale; [`WeightVector::normalise`]
//! rescales them uniformly so the six weights sum to 1 before scoring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dimension;

/// Floating tolerance used when checking whether weights already sum to 1.
const SUM_TOLERANCE: f64 = 1e-9;

/// One non-negative weight per scoring dimension.
///
/// # Examples
/// ```
/// use sitescout_core::{Dimension, WeightVector};
///
/// let weights = WeightVector::default().normalise()?;
/// let total: f64 = Dimension::ALL.iter().map(|d| weights.weight(*d)).sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// # Ok::<(), sitescout_core::WeightError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    /// Weight of the foot-traffic dimension.
    pub foot_traffic: f64,
    /// Weight of the rent dimension.
    pub rent: f64,
    /// Weight of the competition dimension.
    pub competition: f64,
    /// Weight of the amenities dimension.
    pub amenities: f64,
    /// Weight of the transportation dimension.
    pub transportation: f64,
    /// Weight of the target-match dimension.
    pub target_match: f64,
}

/// Errors returned by [`WeightVector::normalise`].
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    /// A weight was negative.
    #[error("weight for {dimension} must be non-negative, found {value}")]
    NegativeWeight {
        /// Dimension carrying the offending weight.
        dimension: Dimension,
        /// Offending value.
        value: f64,
    },
    /// A weight was NaN or infinite.
    #[error("weight for {dimension} must be finite")]
    NonFiniteWeight {
        /// Dimension carrying the offending weight.
        dimension: Dimension,
    },
    /// All six weights were zero; rescaling would divide by zero.
    #[error("weights sum to zero; at least one weight must be positive")]
    ZeroSum,
}

impl Default for WeightVector {
    /// The source model's default weighting.
    fn default() -> Self {
        Self {
            foot_traffic: 0.3,
            rent: 0.2,
            competition: 0.15,
            amenities: 0.15,
            transportation: 0.1,
            target_match: 0.1,
        }
    }
}

impl WeightVector {
    /// Return the weight for one dimension.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::FootTraffic => self.foot_traffic,
            Dimension::Rent => self.rent,
            Dimension::Competition => self.competition,
            Dimension::Amenities => self.amenities,
            Dimension::Transportation => self.transportation,
            Dimension::TargetMatch => self.target_match,
        }
    }

    /// Sum of the six weights.
    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.weight(*d)).sum()
    }

    /// Rescale the weights uniformly so they sum to 1.
    ///
    /// Weights already summing to 1 (within `1e-9`) are returned unchanged,
    /// preserving their exact values. Rescaling divides every weight by the
    /// common sum, so relative ratios are preserved.
    ///
    /// # Errors
    /// Returns [`WeightError`] when any weight is negative or non-finite,
    /// or when all six are zero (the rescale would produce NaN).
    pub fn normalise(&self) -> Result<Self, WeightError> {
        for dimension in Dimension::ALL {
            let value = self.weight(dimension);
            if !value.is_finite() {
                return Err(WeightError::NonFiniteWeight { dimension });
            }
            if value < 0.0 {
                return Err(WeightError::NegativeWeight { dimension, value });
            }
        }
        let sum = self.sum();
        if sum <= SUM_TOLERANCE {
            return Err(WeightError::ZeroSum);
        }
        if (sum - 1.0).abs() <= SUM_TOLERANCE {
            return Ok(*self);
        }
        Ok(Self {
            foot_traffic: self.foot_traffic / sum,
            rent: self.rent / sum,
            competition: self.competition / sum,
            amenities: self.amenities / sum,
            transportation: self.transportation / sum,
            target_match: self.target_match / sum,
        })
    }
}
