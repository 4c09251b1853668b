//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{error, info};

use crate::domain::{Coordinate, FuelType, InvalidCoordinate, UnknownFuelType};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/fuel-types", get(fuel_types))
        .route("/api/state", get(current_state))
        .route("/api/search", post(search))
        .route("/api/sort", put(set_sort))
        .route("/api/fuel-type", put(set_fuel_type))
        .route("/api/radius", put(set_radius))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All selectable fuel types, in display order.
async fn fuel_types() -> Json<FuelTypesResponse> {
    let fuel_types = FuelType::ALL
        .iter()
        .map(|f| FuelTypeResult::from_fuel_type(*f))
        .collect();

    Json(FuelTypesResponse { fuel_types })
}

/// The currently published search state.
async fn current_state(State(state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse::from_state(&state.orchestrator.snapshot()))
}

/// Search around a position.
///
/// A failed fetch is not an HTTP error: the returned state carries the
/// failure and the previous stations.
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let reference = Coordinate::new(req.latitude, req.longitude)?;

    let result = state.orchestrator.search(reference).await;
    Ok(Json(StateResponse::from_state(&result)))
}

/// Re-rank the current stations.
async fn set_sort(
    State(state): State<AppState>,
    Json(req): Json<SortRequest>,
) -> Json<StateResponse> {
    let result = state.orchestrator.set_sort_criterion(req.criterion);
    Json(StateResponse::from_state(&result))
}

/// Select the fuel type for the next search.
async fn set_fuel_type(
    State(state): State<AppState>,
    Json(req): Json<FuelTypeRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let fuel_type = FuelType::from_wire_token(&req.fuel_type)?;
    info!(fuel = fuel_type.wire_token(), "fuel type changed");

    let result = state.orchestrator.set_fuel_type(fuel_type);
    Ok(Json(StateResponse::from_state(&result)))
}

/// Set the radius for the next search.
async fn set_radius(
    State(state): State<AppState>,
    Json(req): Json<RadiusRequest>,
) -> Json<StateResponse> {
    let result = state.orchestrator.set_radius(&req.radius);
    Json(StateResponse::from_state(&result))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<UnknownFuelType> for AppError {
    fn from(e: UnknownFuelType) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
