//! Location profiles: the raw attributes of one candidate retail site.
//!
//! A [`LocationProfile`] is assembled by the caller (form layer, file
//! import) and passed by reference into the scoring pipeline. `validate`
//! checks the ranges the formulas rely on; the engine never mutates a
//! profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CityTier;

/// Business-district classification of the surrounding area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistrictType {
    /// Core commercial district.
    Core,
    /// Regional district.
    Regional,
    /// Community district.
    Community,
    /// Specialty or destination district.
    Specialty,
}

/// Dominant pedestrian flow type at the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PedestrianType {
    /// Shoppers.
    Shopping,
    /// Commuters passing through.
    Commuter,
    /// Tourists.
    Tourist,
    /// A mix of the above.
    Mixed,
}

/// Hourly peak pedestrian counts across the measured windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficCounts {
    /// Morning peak count (people per hour).
    pub morning_peak: u32,
    /// Afternoon peak count.
    pub afternoon_peak: u32,
    /// Evening peak count.
    pub evening_peak: u32,
    /// Weekend average peak count.
    pub weekend: u32,
    /// Public-holiday average peak count.
    pub holiday: u32,
}

/// Target-demographic match sub-scores, each on a 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemographicMatch {
    /// Match with the intended customer demographic.
    pub demographic: f64,
    /// Match with the surrounding age structure.
    pub age_group: f64,
    /// Match with local income levels.
    pub income_level: f64,
    /// Match with local consumption habits.
    pub consumer_behaviour: f64,
}

/// Raw attributes of one candidate location.
///
/// # Examples
/// ```
/// use sitescout_core::LocationProfile;
///
/// let profile = LocationProfile::sample();
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Human-readable site name; the stable identifier in reports.
    pub name: String,
    /// City tier, used for the rent baseline.
    pub city_tier: CityTier,
    /// Surrounding business-district type.
    pub district: DistrictType,
    /// Floor area in square metres; must be positive.
    pub floor_area_sqm: f64,
    /// Monthly rent in currency units; non-negative.
    pub monthly_rent: f64,
    /// Lease term in years.
    pub lease_years: u8,
    /// Peak pedestrian counts.
    pub traffic: TrafficCounts,
    /// Dominant pedestrian flow type.
    pub pedestrian_type: PedestrianType,
    /// Number of direct competitors nearby.
    pub competitor_count: u32,
    /// Distance to the nearest competitor in metres; non-negative.
    pub competitor_distance_m: f64,
    /// Market saturation on a 0–100 scale.
    pub market_saturation: f64,
    /// Competitive advantage on a 0–100 scale.
    pub competitive_advantage: f64,
    /// Transportation convenience on a 0–10 scale.
    pub transport_convenience: f64,
    /// Nearby parking spots.
    pub parking_spots: u32,
    /// Nearby bus or metro stops.
    pub transit_stops: u32,
    /// Amenities completeness on a 0–10 scale.
    pub amenities_completeness: f64,
    /// Residential density on a 0–10 scale.
    pub residential_density: f64,
    /// Commercial density on a 0–10 scale.
    pub commercial_density: f64,
    /// Target-demographic match sub-scores.
    pub demographics: DemographicMatch,
}

/// Errors returned by [`LocationProfile::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    /// Floor area must be strictly positive.
    #[error("floor area must be positive, found {area}")]
    NonPositiveArea {
        /// Offending area value.
        area: f64,
    },
    /// A field that must be non-negative held a negative value.
    #[error("{field} must be non-negative, found {value}")]
    NegativeValue {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A bounded field fell outside its scale.
    #[error("{field} must be within 0..={max}, found {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Upper bound of the scale.
        max: f64,
    },
}

impl LocationProfile {
    /// Check the ranges the scoring formulas rely on.
    ///
    /// # Errors
    /// Returns [`ProfileError`] for a non-positive floor area, negative
    /// rent or competitor distance, or any bounded field outside its
    /// 0–100 / 0–10 scale.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.floor_area_sqm <= 0.0 {
            return Err(ProfileError::NonPositiveArea {
                area: self.floor_area_sqm,
            });
        }
        for (field, value) in [
            ("monthly_rent", self.monthly_rent),
            ("competitor_distance_m", self.competitor_distance_m),
        ] {
            if value < 0.0 {
                return Err(ProfileError::NegativeValue { field, value });
            }
        }
        for (field, value) in [
            ("market_saturation", self.market_saturation),
            ("competitive_advantage", self.competitive_advantage),
        ] {
            Self::check_scale(field, value, 100.0)?;
        }
        for (field, value) in [
            ("transport_convenience", self.transport_convenience),
            ("amenities_completeness", self.amenities_completeness),
            ("residential_density", self.residential_density),
            ("commercial_density", self.commercial_density),
            ("demographics.demographic", self.demographics.demographic),
            ("demographics.age_group", self.demographics.age_group),
            ("demographics.income_level", self.demographics.income_level),
            (
                "demographics.consumer_behaviour",
                self.demographics.consumer_behaviour,
            ),
        ] {
            Self::check_scale(field, value, 10.0)?;
        }
        Ok(())
    }

    fn check_scale(field: &'static str, value: f64, max: f64) -> Result<(), ProfileError> {
        if !(0.0..=max).contains(&value) {
            return Err(ProfileError::OutOfRange { field, value, max });
        }
        Ok(())
    }

    /// A plausible high-street profile used in documentation and tests.
    pub fn sample() -> Self {
        Self {
            name: "Sample high street".into(),
            city_tier: CityTier::Tier1,
            district: DistrictType::Core,
            floor_area_sqm: 100.0,
            monthly_rent: 10_000.0,
            lease_years: 3,
            traffic: TrafficCounts {
                morning_peak: 1_000,
                afternoon_peak: 1_500,
                evening_peak: 2_000,
                weekend: 2_500,
                holiday: 3_000,
            },
            pedestrian_type: PedestrianType::Mixed,
            competitor_count: 3,
            competitor_distance_m: 200.0,
            market_saturation: 50.0,
            competitive_advantage: 60.0,
            transport_convenience: 7.0,
            parking_spots: 50,
            transit_stops: 3,
            amenities_completeness: 8.0,
            residential_density: 6.0,
            commercial_density: 7.0,
            demographics: DemographicMatch {
                demographic: 8.0,
                age_group: 7.0,
                income_level: 6.0,
                consumer_behaviour: 7.0,
            },
        }
    }
}
