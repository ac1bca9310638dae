//! Cross-origin policies for the front-end.
//!
//! Two policies are active at once. The route-level one sits on the flights
//! routes and only allows GET. The process-wide one allows the full set of
//! methods with credentials and covers every other route. Each request passes
//! through exactly one of the two layers, so the narrower policy is the one
//! that answers for `/api/flights`.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use crate::error::ServerError;

/// A single CORS declaration, kept as plain data until a layer is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origin: String,
    pub allowed_methods: Vec<Method>,
    pub allow_any_header: bool,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    /// GET only, any header, no credentials.
    pub fn route_level(origin: &str) -> Self {
        Self {
            allowed_origin: origin.to_string(),
            allowed_methods: vec![Method::GET],
            allow_any_header: true,
            allow_credentials: false,
        }
    }

    /// Every route that has no policy of its own.
    pub fn process_wide(origin: &str) -> Self {
        Self {
            allowed_origin: origin.to_string(),
            allowed_methods: vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ],
            allow_any_header: true,
            allow_credentials: true,
        }
    }

    pub fn layer(&self) -> Result<CorsLayer, ServerError> {
        let origin =
            HeaderValue::from_str(&self.allowed_origin).map_err(|source| {
                ServerError::InvalidOrigin {
                    origin: self.allowed_origin.clone(),
                    source,
                }
            })?;

        let layer = CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods(self.allowed_methods.clone())
            .allow_credentials(self.allow_credentials);

        // A literal `*` is not honoured by browsers on credentialed requests,
        // so "any header" becomes an echo of the requested headers.
        let layer = match (self.allow_any_header, self.allow_credentials) {
            (true, true) => layer.allow_headers(AllowHeaders::mirror_request()),
            (true, false) => layer.allow_headers(Any),
            (false, _) => layer,
        };

        Ok(layer)
    }
}

/// Both policies for one front-end origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicies {
    pub route_level: CorsPolicy,
    pub process_wide: CorsPolicy,
}

impl CorsPolicies {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            route_level: CorsPolicy::route_level(origin),
            process_wide: CorsPolicy::process_wide(origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_level_allows_only_get() {
        let policy = CorsPolicy::route_level("http://localhost:5173");
        assert_eq!(policy.allowed_methods, vec![Method::GET]);
        assert!(!policy.allow_credentials);
        assert!(policy.allow_any_header);
    }

    #[test]
    fn test_process_wide_allows_credentials() {
        let policy = CorsPolicy::process_wide("http://localhost:5173");
        assert_eq!(policy.allowed_methods.len(), 5);
        assert!(policy.allowed_methods.contains(&Method::DELETE));
        assert!(policy.allow_credentials);
    }

    #[test]
    fn test_policies_share_origin() {
        let policies = CorsPolicies::for_origin("http://localhost:5173");
        assert_eq!(policies.route_level.allowed_origin, "http://localhost:5173");
        assert_eq!(policies.process_wide.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn test_layer_builds_for_both_policies() {
        let policies = CorsPolicies::for_origin("http://localhost:5173");
        assert!(policies.route_level.layer().is_ok());
        assert!(policies.process_wide.layer().is_ok());
    }

    #[test]
    fn test_layer_rejects_unencodable_origin() {
        let policy = CorsPolicy::route_level("http://bad\norigin");
        let err = policy.layer().unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin { .. }));
    }
}
