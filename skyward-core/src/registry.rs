use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::flight::Flight;
use crate::seat::{Seat, SeatClass};
use crate::BookingError;

/// A flight produced by a generator: identity and departure, no seat state.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    pub flight_number: String,
    pub departure_time: DateTime<Utc>,
}

/// Source of flights for a searched route.
///
/// Contract: the returned plans are sorted ascending by departure time and
/// carry flight numbers unique within the batch. Implementations are
/// replaceable without touching the registry (a random generator for demo
/// data, a real schedule lookup in production).
pub trait FlightGenerator: Send + Sync {
    fn generate(&self, origin: &str, destination: &str, count: usize) -> Vec<FlightPlan>;
}

/// Serializable view of a flight for search results.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
}

/// The active collection of bookable flights, keyed by flight number.
///
/// A search REPLACES the whole collection (fresh-query model): flights from
/// a prior search are discarded together with their booking state, and
/// booking them afterwards fails with `InvalidFlight`. This destructive
/// semantics is deliberate, not a cache that forgot to accumulate.
pub struct BookingRegistry {
    flights: RwLock<HashMap<String, Arc<Flight>>>,
    generator: Arc<dyn FlightGenerator>,
    flights_per_search: usize,
}

impl BookingRegistry {
    pub fn new(generator: Arc<dyn FlightGenerator>, flights_per_search: usize) -> Self {
        Self {
            flights: RwLock::new(HashMap::new()),
            generator,
            flights_per_search,
        }
    }

    /// Search a route: generate a fresh flight set, install it as the new
    /// registry state, and return it in departure-time order.
    ///
    /// The swap happens under the write lock, so it cannot interleave with a
    /// flight lookup; bookings already holding an `Arc` to a replaced flight
    /// complete against that flight and then find it unreachable.
    pub fn search_flights(&self, origin: &str, destination: &str) -> Vec<FlightSummary> {
        let plans = self
            .generator
            .generate(origin, destination, self.flights_per_search);

        let fresh: Vec<Arc<Flight>> = plans
            .into_iter()
            .map(|plan| {
                Arc::new(Flight::new(
                    plan.flight_number,
                    origin,
                    destination,
                    plan.departure_time,
                ))
            })
            .collect();

        let summaries: Vec<FlightSummary> = fresh
            .iter()
            .map(|flight| FlightSummary {
                flight_number: flight.flight_number.clone(),
                origin: flight.origin.clone(),
                destination: flight.destination.clone(),
                departure_time: flight.departure_time,
            })
            .collect();

        let mut flights = self.flights.write();
        flights.clear();
        for flight in fresh {
            flights.insert(flight.flight_number.clone(), flight);
        }
        drop(flights);

        info!(
            "Search {} -> {}: {} flights installed",
            origin,
            destination,
            summaries.len()
        );
        summaries
    }

    /// Look up a flight in the current set. The registry lock is released
    /// before the caller touches the seat map, so work on one flight never
    /// serializes another.
    pub fn flight(&self, flight_number: &str) -> Option<Arc<Flight>> {
        self.flights.read().get(flight_number).cloned()
    }

    /// Available seats on a flight, optionally filtered by class.
    pub fn available_seats(
        &self,
        flight_number: &str,
        seat_class: Option<SeatClass>,
    ) -> Result<Vec<Seat>, BookingError> {
        let flight = self
            .flight(flight_number)
            .ok_or_else(|| BookingError::InvalidFlight(flight_number.to_string()))?;
        Ok(flight.available_seats(seat_class))
    }

    /// Clone of one seat on a flight; `Ok(None)` means the seat number is
    /// not part of the layout.
    pub fn seat(&self, flight_number: &str, seat_number: &str) -> Result<Option<Seat>, BookingError> {
        let flight = self
            .flight(flight_number)
            .ok_or_else(|| BookingError::InvalidFlight(flight_number.to_string()))?;
        Ok(flight.seat(seat_number))
    }

    /// Route a booking to the named flight.
    ///
    /// `Ok(true)` commits the seat, `Ok(false)` reports contention (someone
    /// already holds it), and the error arms report unknown flight or seat.
    pub fn book_flight(
        &self,
        flight_number: &str,
        seat_number: &str,
        passenger_name: &str,
    ) -> Result<bool, BookingError> {
        let flight = self
            .flight(flight_number)
            .ok_or_else(|| BookingError::InvalidFlight(flight_number.to_string()))?;

        let booked = flight.book_seat(seat_number, passenger_name)?;
        if booked {
            info!(
                "Booking confirmed: flight {} seat {} for {}",
                flight_number, seat_number, passenger_name
            );
        } else {
            debug!(
                "Booking contention: flight {} seat {} already occupied",
                flight_number, seat_number
            );
        }
        Ok(booked)
    }
}
