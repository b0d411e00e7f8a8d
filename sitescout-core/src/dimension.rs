//! The six scoring axes of the evaluation model.
//!
//! The enum offers compile-time safety for weight and score lookups.
//!
//! # Examples
//! ```
//! use sitescout_core::Dimension;
//!
//! assert_eq!(Dimension::FootTraffic.as_str(), "foot-traffic");
//! assert_eq!(Dimension::ALL.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

/// One of the six scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    /// Pedestrian volume at the site.
    FootTraffic,
    /// Rent cost relative to the city-tier baseline.
    Rent,
    /// Competitive pressure around the site.
    Competition,
    /// Surrounding amenities and density.
    Amenities,
    /// Transport connectivity.
    Transportation,
    /// Match with the target customer group.
    TargetMatch,
}

impl Dimension {
    /// All six dimensions in canonical order.
    pub const ALL: [Self; 6] = [
        Self::FootTraffic,
        Self::Rent,
        Self::Competition,
        Self::Amenities,
        Self::Transportation,
        Self::TargetMatch,
    ];

    /// Return the dimension as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FootTraffic => "foot-traffic",
            Self::Rent => "rent",
            Self::Competition => "competition",
            Self::Amenities => "amenities",
            Self::Transportation => "transportation",
            Self::TargetMatch => "target-match",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "foot-traffic" => Ok(Self::FootTraffic),
            "rent" => Ok(Self::Rent),
            "competition" => Ok(Self::Competition),
            "amenities" => Ok(Self::Amenities),
            "transportation" => Ok(Self::Transportation),
            "target-match" => Ok(Self::TargetMatch),
            _ => Err(format!("unknown dimension '{s}'")),
        }
    }
}
