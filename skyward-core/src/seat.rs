use serde::{Deserialize, Serialize};

/// Cabin classes, front of the aircraft first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    First,
    Business,
    Economy,
}

impl SeatClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::First => "first",
            SeatClass::Business => "business",
            SeatClass::Economy => "economy",
        }
    }
}

impl std::fmt::Display for SeatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SeatClass {
    type Err = ParseSeatClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(SeatClass::First),
            "business" => Ok(SeatClass::Business),
            "economy" => Ok(SeatClass::Economy),
            other => Err(ParseSeatClassError(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown seat class: {0}")]
pub struct ParseSeatClassError(pub String);

/// A single unit of inventory on a flight.
///
/// Occupancy is derived from `occupant`: a seat is occupied exactly when an
/// occupant is recorded, so the two can never disagree. Mutation happens only
/// through the owning [`crate::Flight`], which guards the seat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub occupant: Option<String>,
}

impl Seat {
    pub(crate) fn new(seat_number: String, seat_class: SeatClass) -> Self {
        Self {
            seat_number,
            seat_class,
            occupant: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn summary(&self) -> SeatSummary {
        SeatSummary {
            seat_number: self.seat_number.clone(),
            seat_class: self.seat_class,
            occupied: self.is_occupied(),
            occupant: self.occupant.clone(),
        }
    }
}

/// Serializable view of a seat for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SeatSummary {
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub occupied: bool,
    pub occupant: Option<String>,
}
