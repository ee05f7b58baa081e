pub mod flight;
pub mod registry;
pub mod seat;

pub use flight::Flight;
pub use registry::{BookingRegistry, FlightGenerator, FlightPlan, FlightSummary};
pub use seat::{Seat, SeatClass, SeatSummary};

/// Caller-input errors: a request named inventory that does not exist.
/// Booking contention (seat already taken) is not an error, it is the
/// `Ok(false)` arm of the booking operations.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid flight number: {0}")]
    InvalidFlight(String),

    #[error("Invalid seat number: {0}")]
    InvalidSeat(String),
}
