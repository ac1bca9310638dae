mod generator;

use serde::Serialize;

pub use generator::generate_schedule;

/// Every generated flight departs from here.
pub const ORIGIN: &str = "Tallinn";

/// Number of records in one generated schedule.
pub const SCHEDULE_SIZE: usize = 20;

pub const DESTINATIONS: [&str; 8] = [
    "London",
    "Paris",
    "Berlin",
    "Oslo",
    "Helsinki",
    "Rome",
    "Amsterdam",
    "Vienna",
];

pub const DEPARTURE_TIMES: [&str; 10] = [
    "06:00", "08:15", "09:30", "11:45", "13:00", "14:20", "16:40", "18:10", "20:00", "22:30",
];

pub const DURATIONS: [&str; 6] = ["2h 10m", "2h 30m", "3h", "2h 50m", "1h 45m", "2h 15m"];

/// Lowest price a flight can be offered at, in euros.
pub const MIN_PRICE: u32 = 50;

/// Width of the price draw. The draw is exclusive, so the top price is
/// `MIN_PRICE + PRICE_SPREAD - 1`.
pub const PRICE_SPREAD: u32 = 200;

/// One synthetic flight leg.
///
/// Field names follow the front-end's wire format (`from`, `to`, `time`), not
/// the Rust names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    /// Echoed verbatim from the request, never parsed.
    pub date: String,
    #[serde(rename = "time")]
    pub departure_time: String,
    pub duration: String,
    pub price: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_record_wire_format() {
        let record = FlightRecord {
            origin: ORIGIN.to_string(),
            destination: "Oslo".to_string(),
            date: "2024-01-15".to_string(),
            departure_time: "06:00".to_string(),
            duration: "2h 10m".to_string(),
            price: 120,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": "Tallinn",
                "to": "Oslo",
                "date": "2024-01-15",
                "time": "06:00",
                "duration": "2h 10m",
                "price": 120,
            })
        );
    }

    #[test]
    fn test_departure_times_are_hh_mm() {
        for time in DEPARTURE_TIMES {
            let (hours, minutes) = time.split_once(':').unwrap();
            assert_eq!(hours.len(), 2, "{time}");
            assert_eq!(minutes.len(), 2, "{time}");
            assert!(hours.parse::<u8>().unwrap() < 24, "{time}");
            assert!(minutes.parse::<u8>().unwrap() < 60, "{time}");
        }
    }
}
