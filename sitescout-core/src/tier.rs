//! City tiers describing a city's commercial maturity.
//!
//! The tier sets the rent-per-area baseline used by the rent dimension.
//!
//! # Examples
//! ```
//! use sitescout_core::CityTier;
//!
//! assert_eq!(CityTier::Tier1.as_str(), "tier1");
//! assert_eq!(CityTier::Tier4Plus.rent_standard(), 100.0);
//! ```

use serde::{Deserialize, Serialize};

/// Baseline applied when a tier label cannot be recognised.
pub(crate) const FALLBACK_RENT_STANDARD: f64 = 200.0;

/// Commercial maturity classification of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CityTier {
    /// First-tier metropolis.
    Tier1,
    /// Second-tier city.
    Tier2,
    /// Third-tier city.
    Tier3,
    /// Fourth-tier and below.
    Tier4Plus,
}

impl CityTier {
    /// Return the tier as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use sitescout_core::CityTier;
    ///
    /// assert_eq!(CityTier::Tier2.as_str(), "tier2");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
            Self::Tier4Plus => "tier4-plus",
        }
    }

    /// Benchmark rent in currency units per square metre for this tier.
    pub fn rent_standard(&self) -> f64 {
        match self {
            Self::Tier1 => 500.0,
            Self::Tier2 => 300.0,
            Self::Tier3 => 200.0,
            Self::Tier4Plus => 100.0,
        }
    }

    /// Benchmark rent for an optionally recognised tier.
    ///
    /// Unrecognised tiers fall back to the third-tier baseline of 200,
    /// mirroring the lenient lookup batch input goes through.
    pub fn rent_standard_or_default(tier: Option<Self>) -> f64 {
        tier.map_or(FALLBACK_RENT_STANDARD, |t| t.rent_standard())
    }
}

impl std::fmt::Display for CityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tier1" => Ok(Self::Tier1),
            "tier2" => Ok(Self::Tier2),
            "tier3" => Ok(Self::Tier3),
            "tier4-plus" => Ok(Self::Tier4Plus),
            _ => Err(format!("unknown city tier '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(CityTier::Tier4Plus.to_string(), CityTier::Tier4Plus.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = CityTier::from_str("megacity").unwrap_err();
        assert!(err.contains("unknown city tier"));
    }

    #[test]
    fn unknown_tier_falls_back_to_default_standard() {
        assert_eq!(CityTier::rent_standard_or_default(None), 200.0);
        assert_eq!(
            CityTier::rent_standard_or_default(Some(CityTier::Tier1)),
            500.0
        );
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&CityTier::Tier4Plus).unwrap();
        assert_eq!(json, "\"tier4-plus\"");
    }
}
