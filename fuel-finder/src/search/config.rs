//! Search configuration and radius policy.

use crate::domain::{FuelType, parse_decimal};

use super::rank::SortCriterion;

/// Configuration parameters for station search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius used when the typed radius is unusable (km).
    pub default_radius_km: f64,

    /// Smallest radius ever sent to the source (km).
    pub min_radius_km: f64,

    /// Largest radius ever sent to the source (km).
    pub max_radius_km: f64,

    /// Radius text used when no preference is stored.
    pub default_radius_text: String,

    /// Fuel type used when no (valid) preference is stored.
    pub default_fuel_type: FuelType,

    /// Sort criterion at startup.
    pub default_sort: SortCriterion,
}

impl SearchConfig {
    /// Effective search radius in kilometers for the text a user typed.
    ///
    /// Text that does not parse, or parses to zero or less, falls back to
    /// the default radius. Anything else is clamped into
    /// `[min_radius_km, max_radius_km]`. This never fails.
    pub fn effective_radius_km(&self, text: &str) -> f64 {
        match parse_decimal(text) {
            Ok(km) if km > 0.0 => km.clamp(self.min_radius_km, self.max_radius_km),
            _ => self.default_radius_km,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 10.0,
            min_radius_km: 0.1,
            max_radius_km: 100.0,
            default_radius_text: "10".to_string(),
            default_fuel_type: FuelType::Gasoline95E5,
            default_sort: SortCriterion::Price,
        }
    }
}

/// Convert a radius in kilometers to whole meters, truncating.
pub fn radius_meters(km: f64) -> u32 {
    (km * 1000.0) as u32
}
