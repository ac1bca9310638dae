use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use crate::flights::{self, FlightRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct FlightsQuery {
    /// Free-form; copied into every record as-is.
    pub date: String,
}

/// GET /flights?date=... — a freshly generated schedule for the date.
///
/// A missing `date` is rejected by the `Query` extractor with 400 before this runs.
pub(crate) async fn list_flights(Query(query): Query<FlightsQuery>) -> Json<Vec<FlightRecord>> {
    let schedule = flights::generate_schedule(&query.date);
    tracing::debug!(date = %query.date, count = schedule.len(), "generated flight schedule");
    Json(schedule)
}
