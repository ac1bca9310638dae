use axum::{
    body::Body,
    http::{Request, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::Instrument;

/// Runs the request inside a span carrying the method, path, host and query.
pub async fn request_span_middleware(req: Request<Body>, next: Next) -> Response {
    let host = req
        .headers()
        .get("host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("UNKNOWN");

    let span = tracing::info_span!(
        "request",
        http.method = %req.method(),
        http.uri = %req.uri().path(),
        http.host = %host,
        http.query = tracing::field::Empty,
    );
    if let Some(query) = req.uri().query() {
        span.record("http.query", query);
    }

    async move {
        let response = next.run(req).await;
        tracing::debug!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}

pub async fn strip_trailing_slash(req: Request<Body>, next: Next) -> Response {
    match without_trailing_slash(req.uri()) {
        Some(target) => Redirect::permanent(&target).into_response(),
        None => next.run(req).await,
    }
}

/// The redirect target for `uri`, or `None` when it has no trailing slash.
/// The root path is left alone.
fn without_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path().strip_suffix('/').filter(|p| !p.is_empty())?;
    Some(match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let uri: Uri = "/api/flights/".parse().unwrap();
        assert_eq!(without_trailing_slash(&uri).as_deref(), Some("/api/flights"));
    }

    #[test]
    fn test_trailing_slash_keeps_query() {
        let uri: Uri = "/api/flights/?date=2024-01-15".parse().unwrap();
        assert_eq!(
            without_trailing_slash(&uri).as_deref(),
            Some("/api/flights?date=2024-01-15")
        );
    }

    #[test]
    fn test_root_path_untouched() {
        let uri: Uri = "/".parse().unwrap();
        assert!(without_trailing_slash(&uri).is_none());
    }

    #[test]
    fn test_path_without_slash_untouched() {
        let uri: Uri = "/health".parse().unwrap();
        assert!(without_trailing_slash(&uri).is_none());
    }
}
