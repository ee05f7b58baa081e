use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::seat::{Seat, SeatClass};
use crate::BookingError;

const PREMIUM_COLUMNS: [char; 4] = ['A', 'B', 'E', 'F'];
const ECONOMY_COLUMNS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// A scheduled flight and its seat map.
///
/// The seat map is built once at construction (166 seats: rows 1-2 first,
/// rows 3-7 business, rows 8-30 economy) and never resized. Seats are stored
/// in layout order, which is the canonical iteration order for availability
/// listings. All seat mutation goes through [`Flight::book_seat`] under the
/// map's write lock.
#[derive(Debug)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    seats: RwLock<Vec<Seat>>,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: DateTime<Utc>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            seats: RwLock::new(build_seat_map()),
        }
    }

    /// Snapshot of unoccupied seats, optionally restricted to one class,
    /// in layout order. Taken under the read lock, so a seat whose booking
    /// committed before the call can never appear as available.
    pub fn available_seats(&self, seat_class: Option<SeatClass>) -> Vec<Seat> {
        let seats = self.seats.read();
        seats
            .iter()
            .filter(|seat| !seat.is_occupied())
            .filter(|seat| seat_class.map_or(true, |class| seat.seat_class == class))
            .cloned()
            .collect()
    }

    /// Clone of the named seat. Absence means the seat number is not part of
    /// this aircraft's layout, which callers treat as a normal outcome.
    pub fn seat(&self, seat_number: &str) -> Option<Seat> {
        let seats = self.seats.read();
        seats
            .iter()
            .find(|seat| seat.seat_number == seat_number)
            .cloned()
    }

    /// Atomically book a seat for a passenger.
    ///
    /// Returns `Ok(true)` when this call flipped the seat from available to
    /// occupied, `Ok(false)` when another booking already holds it, and
    /// `Err(InvalidSeat)` when the seat number is not in the layout. The
    /// check-then-set runs under the write lock: of any number of concurrent
    /// calls for the same free seat, exactly one observes `Ok(true)`.
    pub fn book_seat(&self, seat_number: &str, passenger_name: &str) -> Result<bool, BookingError> {
        let mut seats = self.seats.write();
        let seat = seats
            .iter_mut()
            .find(|seat| seat.seat_number == seat_number)
            .ok_or_else(|| BookingError::InvalidSeat(seat_number.to_string()))?;

        if seat.is_occupied() {
            return Ok(false);
        }

        seat.occupant = Some(passenger_name.to_string());
        Ok(true)
    }

    pub fn seat_count(&self) -> usize {
        self.seats.read().len()
    }
}

fn build_seat_map() -> Vec<Seat> {
    let mut seats = Vec::with_capacity(166);

    // First class, rows 1-2
    for row in 1..=2 {
        for col in PREMIUM_COLUMNS {
            seats.push(Seat::new(format!("{row}{col}"), SeatClass::First));
        }
    }

    // Business class, rows 3-7
    for row in 3..=7 {
        for col in PREMIUM_COLUMNS {
            seats.push(Seat::new(format!("{row}{col}"), SeatClass::Business));
        }
    }

    // Economy class, rows 8-30
    for row in 8..=30 {
        for col in ECONOMY_COLUMNS {
            seats.push(Seat::new(format!("{row}{col}"), SeatClass::Economy));
        }
    }

    seats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_flight() -> Flight {
        Flight::new("AA1234", "Paris", "Tokyo", Utc::now())
    }

    #[test]
    fn test_seat_map_layout() {
        let flight = test_flight();
        assert_eq!(flight.seat_count(), 166);

        let first = flight.available_seats(Some(SeatClass::First));
        let business = flight.available_seats(Some(SeatClass::Business));
        let economy = flight.available_seats(Some(SeatClass::Economy));
        assert_eq!(first.len(), 8);
        assert_eq!(business.len(), 20);
        assert_eq!(economy.len(), 138);

        // Layout order: row-major, premium columns skip C and D.
        let all = flight.available_seats(None);
        let head: Vec<&str> = all.iter().take(5).map(|s| s.seat_number.as_str()).collect();
        assert_eq!(head, ["1A", "1B", "1E", "1F", "2A"]);

        assert!(flight.seat("8C").is_some());
        assert!(flight.seat("3C").is_none());
        assert!(flight.seat("31A").is_none());
    }

    #[test]
    fn test_book_free_seat_then_contend() {
        let flight = test_flight();

        assert!(flight.book_seat("15A", "Jane Doe").unwrap());

        // Second booking loses without disturbing the original occupant.
        assert!(!flight.book_seat("15A", "John Smith").unwrap());
        let seat = flight.seat("15A").unwrap();
        assert_eq!(seat.occupant.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_book_unknown_seat_is_invalid() {
        let flight = test_flight();
        let before = flight.available_seats(None).len();

        let err = flight.book_seat("99Z", "Jane Doe").unwrap_err();
        assert!(matches!(err, BookingError::InvalidSeat(ref n) if n == "99Z"));

        // Nothing changed.
        assert_eq!(flight.available_seats(None).len(), before);
    }

    #[test]
    fn test_available_seats_class_filter_excludes_booked() {
        let flight = test_flight();
        flight.book_seat("1A", "Jane Doe").unwrap();

        let first = flight.available_seats(Some(SeatClass::First));
        assert_eq!(first.len(), 7);
        assert!(first.iter().all(|s| s.seat_class == SeatClass::First));
        assert!(first.iter().all(|s| !s.is_occupied()));
        assert!(!first.iter().any(|s| s.seat_number == "1A"));
    }

    #[test]
    fn test_concurrent_booking_single_winner() {
        let flight = Arc::new(test_flight());
        let mut handles = Vec::new();

        for i in 0..8 {
            let flight = Arc::clone(&flight);
            handles.push(std::thread::spawn(move || {
                let passenger = format!("passenger-{i}");
                let booked = flight.book_seat("12B", &passenger).unwrap();
                (passenger, booked)
            }));
        }

        let results: Vec<(String, bool)> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners: Vec<&String> = results
            .iter()
            .filter(|(_, booked)| *booked)
            .map(|(name, _)| name)
            .collect();

        assert_eq!(winners.len(), 1);
        let seat = flight.seat("12B").unwrap();
        assert_eq!(seat.occupant.as_ref(), Some(winners[0]));
    }

    #[test]
    fn test_booking_scenario_paris_tokyo() {
        let flight = test_flight();

        let seat = flight.seat("3A").unwrap();
        assert_eq!(seat.seat_class, SeatClass::Business);
        assert!(!seat.is_occupied());

        assert!(flight.book_seat("3A", "Jane Doe").unwrap());
        assert!(!flight.book_seat("3A", "John Smith").unwrap());

        let seat = flight.seat("3A").unwrap();
        assert_eq!(seat.occupant.as_deref(), Some("Jane Doe"));
    }
}
