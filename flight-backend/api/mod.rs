pub mod cors;
pub mod flights;
pub mod middleware;
mod routes;

use axum::Router;

use crate::error::ServerError;

pub use cors::CorsPolicies;

pub fn create_app(cors: &CorsPolicies) -> Result<Router, ServerError> {
    routes::build_router(cors)
}
