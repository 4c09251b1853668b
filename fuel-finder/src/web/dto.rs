//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, FuelType, Station};
use crate::search::{SearchPhase, SearchState, SortCriterion};

/// Request to search around a position.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request to change the sort criterion.
#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub criterion: SortCriterion,
}

/// Request to change the fuel type.
#[derive(Debug, Deserialize)]
pub struct FuelTypeRequest {
    /// Wire token, e.g. "Gasoil_A"
    pub fuel_type: String,
}

/// Request to change the search radius.
#[derive(Debug, Deserialize)]
pub struct RadiusRequest {
    /// Radius in km, as typed
    pub radius: String,
}

/// A fuel type option.
#[derive(Debug, Serialize, PartialEq)]
pub struct FuelTypeResult {
    pub token: &'static str,
    pub label: &'static str,
}

/// Response listing all fuel types.
#[derive(Debug, Serialize)]
pub struct FuelTypesResponse {
    pub fuel_types: Vec<FuelTypeResult>,
}

/// A position in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct CoordinateResult {
    pub latitude: f64,
    pub longitude: f64,
}

/// A station in the published list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub trader: String,
    /// Town and municipality, deduplicated
    pub address: String,
    pub schedule: String,
    /// Price exactly as published
    pub price: String,
    pub latitude: String,
    pub longitude: String,

    /// Human-readable distance from the reference ("850 m", "1.2 km")
    pub distance: Option<String>,

    pub distance_meters: Option<f64>,
}

/// The published search state.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// One of idle, searching, ready, failed
    pub phase: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub reference: Option<CoordinateResult>,
    pub radius: String,
    pub radius_km: f64,
    pub fuel_type: FuelTypeResult,
    pub sort: SortCriterion,
    pub stations: Vec<StationResult>,
    /// RFC 3339 timestamp of the last successful fetch
    pub updated_at: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FuelTypeResult {
    pub fn from_fuel_type(fuel_type: FuelType) -> Self {
        Self {
            token: fuel_type.wire_token(),
            label: fuel_type.label(),
        }
    }
}

impl CoordinateResult {
    pub fn from_coordinate(coordinate: &Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        }
    }
}

impl StationResult {
    /// Create from a domain Station, measuring from `reference` if known.
    pub fn from_station(station: &Station, reference: Option<&Coordinate>) -> Self {
        let distance = reference.and_then(|r| station.distance_from(r));

        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            trader: station.trader().to_string(),
            address: station.full_address(),
            schedule: station.schedule().to_string(),
            price: station.price().as_str().to_string(),
            latitude: station.latitude().to_string(),
            longitude: station.longitude().to_string(),
            distance: distance.map(|d| d.to_string()),
            distance_meters: distance.map(|d| d.meters()),
        }
    }
}

impl StateResponse {
    pub fn from_state(state: &SearchState) -> Self {
        let phase = match state.phase {
            SearchPhase::Idle => "idle",
            SearchPhase::Searching => "searching",
            SearchPhase::Ready => "ready",
            SearchPhase::Failed { .. } => "failed",
        };

        let reference = state.reference.as_ref();

        Self {
            phase,
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
            reference: reference.map(CoordinateResult::from_coordinate),
            radius: state.radius_text.clone(),
            radius_km: state.radius_km,
            fuel_type: FuelTypeResult::from_fuel_type(state.fuel_type),
            sort: state.sort,
            stations: state
                .stations
                .iter()
                .map(|s| StationResult::from_station(s, reference))
                .collect(),
            updated_at: state.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
