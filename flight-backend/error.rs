use std::io;

use axum::http::header::InvalidHeaderValue;

/// Errors that stop the server from starting or keep it from serving.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("invalid CORS origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    #[error("serve: {0}")]
    Serve(#[source] io::Error),
}
