use rand::Rng;

use super::{
    DEPARTURE_TIMES, DESTINATIONS, DURATIONS, FlightRecord, MIN_PRICE, ORIGIN, PRICE_SPREAD,
    SCHEDULE_SIZE,
};

/// Generate a fresh schedule for `date` using the calling thread's RNG.
pub fn generate_schedule(date: &str) -> Vec<FlightRecord> {
    generate_schedule_with(&mut rand::thread_rng(), date)
}

/// Generate a schedule from a caller-supplied RNG.
///
/// Each field of each record is an independent uniform draw; repeated
/// destinations or times within one schedule are expected.
pub fn generate_schedule_with<R: Rng + ?Sized>(rng: &mut R, date: &str) -> Vec<FlightRecord> {
    (0..SCHEDULE_SIZE)
        .map(|_| FlightRecord {
            origin: ORIGIN.to_string(),
            destination: pick(rng, &DESTINATIONS).to_string(),
            date: date.to_string(),
            departure_time: pick(rng, &DEPARTURE_TIMES).to_string(),
            duration: pick(rng, &DURATIONS).to_string(),
            price: MIN_PRICE + rng.gen_range(0..PRICE_SPREAD),
        })
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
