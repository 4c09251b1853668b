//! Wire types for the station source.

use serde::{Deserialize, Serialize};

use crate::domain::FuelType;

/// A station as returned by the remote API.
///
/// Every field is opaque text; nothing has been parsed or checked yet.
/// Numbers may use either `,` or `.` as decimal separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StationRecord {
    /// Operating company (e.g. "REPSOL")
    pub trader: String,
    /// Station display name
    pub name: String,
    pub town: String,
    pub municipality: String,
    /// Opening hours, free text
    pub schedule: String,
    /// Price per litre for the requested fuel type
    pub price: String,
    pub latitude: String,
    pub longitude: String,
}

/// Parameters for a nearby-stations request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in whole meters
    pub radius_meters: u32,
    pub fuel_type: FuelType,
}

impl NearbyQuery {
    /// Query parameters in the order the API documents them.
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("lat", self.latitude.to_string()),
            ("lon", self.longitude.to_string()),
            ("distance", self.radius_meters.to_string()),
            ("gasType", self.fuel_type.wire_token().to_string()),
        ]
    }
}
