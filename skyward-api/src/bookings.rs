use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use skyward_core::SeatSummary;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct BookingRequest {
    flight_number: String,
    seat_number: String,
    passenger_name: String,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    status: String,
    seat: SeatSummary,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking))
}

/// Commit a booking for one seat. Contention (the seat is already taken)
/// comes back as 409, distinct from the 404s for unknown flight or seat.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // Hold one flight instance for the whole request: a concurrent search
    // can replace the registry set between the commit and the response, and
    // the committed seat must be read from the flight that was booked.
    let flight = state.registry.flight(&req.flight_number).ok_or_else(|| {
        AppError::NotFoundError(format!("Invalid flight number: {}", req.flight_number))
    })?;

    let booked = flight
        .book_seat(&req.seat_number, &req.passenger_name)
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    if !booked {
        return Err(AppError::ConflictError(format!(
            "Seat {} is already occupied",
            req.seat_number
        )));
    }

    let seat = flight
        .seat(&req.seat_number)
        .ok_or_else(|| AppError::NotFoundError(format!("Invalid seat number: {}", req.seat_number)))?;

    info!(
        "Booking confirmed: {} seat {} for {}",
        req.flight_number, req.seat_number, req.passenger_name
    );

    Ok(Json(BookingResponse {
        status: "CONFIRMED".to_string(),
        seat: seat.summary(),
    }))
}
