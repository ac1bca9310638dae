use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use hyper::StatusCode;
use serde_json::json;

use super::cors::CorsPolicies;
use super::middleware;
use crate::error::ServerError;

pub fn build_router(cors: &CorsPolicies) -> Result<Router, ServerError> {
    let health_routes = Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "status": "ok",
            }))
        }),
    );

    // The flights routes carry their own policy; the process-wide one covers
    // everything else so it never answers for `/api/flights`.
    let other_routes = Router::new()
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(cors.process_wide.layer()?);

    Ok(Router::new()
        .nest("/api", api_router(cors)?)
        .merge(other_routes)
        .layer(axum::middleware::from_fn(middleware::strip_trailing_slash))
        .layer(axum::middleware::from_fn(
            middleware::request_span_middleware,
        )))
}

fn api_router(cors: &CorsPolicies) -> Result<Router, ServerError> {
    Ok(Router::new().merge(super::flights::router(&cors.route_level)?))
}

async fn not_found(req: axum::extract::Request) -> impl IntoResponse {
    tracing::warn!("unhandled path: {}", req.uri());
    (StatusCode::NOT_FOUND, "Not Found")
}
