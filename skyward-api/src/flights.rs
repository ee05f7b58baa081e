use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use skyward_core::{FlightSummary, SeatClass, SeatSummary};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct SearchRequest {
    origin: String,
    destination: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    flights: Vec<FlightSummary>,
}

#[derive(Debug, Deserialize)]
struct SeatListQuery {
    class: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeatListResponse {
    seats: Vec<SeatSummary>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/{flight_number}/seats", get(list_available_seats))
}

/// Fresh search: the registry's previous flight set is replaced wholesale.
async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let flights = state.registry.search_flights(&req.origin, &req.destination);
    Ok(Json(SearchResponse { flights }))
}

async fn list_available_seats(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
    Query(query): Query<SeatListQuery>,
) -> Result<Json<SeatListResponse>, AppError> {
    let seat_class = match query.class.as_deref() {
        Some(raw) => Some(
            SeatClass::from_str(raw).map_err(|e| AppError::ValidationError(e.to_string()))?,
        ),
        None => None,
    };

    let seats = state
        .registry
        .available_seats(&flight_number, seat_class)
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    Ok(Json(SeatListResponse {
        seats: seats.iter().map(|seat| seat.summary()).collect(),
    }))
}
