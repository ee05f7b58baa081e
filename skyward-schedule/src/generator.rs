use std::collections::HashSet;

use chrono::{DateTime, Duration, Timelike, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use skyward_core::{FlightGenerator, FlightPlan};

const AIRLINE_CODES: [&str; 7] = ["AA", "UA", "DL", "BA", "LH", "SA", "NA"];
const MINUTE_MARKS: [u32; 4] = [0, 15, 30, 45];

/// Default future horizon for generated departures, in days.
const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Random route-flight generator for demo schedules.
///
/// Flight numbers are an airline code plus a number in 1000-9999, unique
/// within a batch. Departures fall 1 day to `horizon_days` ahead on a
/// quarter-hour mark, and each batch is returned sorted ascending. Seed,
/// clock and horizon are injectable so tests see a reproducible schedule.
pub struct RandomFlightGenerator {
    rng: Mutex<StdRng>,
    now: fn() -> DateTime<Utc>,
    horizon_days: i64,
}

impl RandomFlightGenerator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Replace the clock the horizon is anchored to.
    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Replace the departure horizon. Clamped to at least one day so the
    /// "tomorrow at the earliest" policy survives a zero in the config.
    pub fn with_horizon(mut self, days: i64) -> Self {
        self.horizon_days = days.max(1);
        self
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            now: Utc::now,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    fn random_departure(&self, rng: &mut StdRng, now: DateTime<Utc>) -> DateTime<Utc> {
        let days_ahead = rng.gen_range(1..=self.horizon_days);
        let hour = rng.gen_range(0..24);
        let minute = MINUTE_MARKS[rng.gen_range(0..MINUTE_MARKS.len())];

        let day = now + Duration::days(days_ahead);
        day.with_hour(hour)
            .and_then(|t| t.with_minute(minute))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(day)
    }
}

impl Default for RandomFlightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightGenerator for RandomFlightGenerator {
    fn generate(&self, origin: &str, destination: &str, count: usize) -> Vec<FlightPlan> {
        let mut rng = self.rng.lock();
        let now = (self.now)();

        let mut taken = HashSet::new();
        let mut plans = Vec::with_capacity(count);
        for _ in 0..count {
            // Re-draw on collision so the batch keys cleanly by number.
            let flight_number = loop {
                let airline = AIRLINE_CODES[rng.gen_range(0..AIRLINE_CODES.len())];
                let number: u32 = rng.gen_range(1000..=9999);
                let candidate = format!("{airline}{number}");
                if taken.insert(candidate.clone()) {
                    break candidate;
                }
            };

            plans.push(FlightPlan {
                flight_number,
                departure_time: self.random_departure(&mut rng, now),
            });
        }

        plans.sort_by_key(|plan| plan.departure_time);
        debug!(
            "Generated {} flights for {} -> {}",
            plans.len(),
            origin,
            destination
        );
        plans
    }
}
