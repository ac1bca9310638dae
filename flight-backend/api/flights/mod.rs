pub mod handlers;

use axum::Router;
use axum::routing::get;

use crate::api::cors::CorsPolicy;
use crate::error::ServerError;

pub fn router(policy: &CorsPolicy) -> Result<Router, ServerError> {
    Ok(Router::new()
        .route("/flights", get(handlers::list_flights))
        .layer(policy.layer()?))
}
