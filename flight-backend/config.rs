/// Origin of the Vite dev server the front-end runs on.
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Server configuration loaded from environment variables.
pub struct Config {
    pub port: u16,
    pub frontend_origin: String,
    pub sentry_dsn: Option<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_raw_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("FRONTEND_ORIGIN").ok().as_deref(),
            std::env::var("SENTRY_DSN").ok().as_deref(),
            std::env::var("ENVIRONMENT").ok().as_deref(),
        )
    }

    /// Build a Config from raw string values (as they would come from env vars).
    /// Used directly in tests to avoid mutating process-global environment.
    pub fn from_raw_values(
        port: Option<&str>,
        frontend_origin: Option<&str>,
        sentry_dsn: Option<&str>,
        environment: Option<&str>,
    ) -> Self {
        let port = port.and_then(|v| v.parse().ok()).unwrap_or(8080);

        let frontend_origin = frontend_origin
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FRONTEND_ORIGIN)
            .to_string();

        let sentry_dsn = sentry_dsn.filter(|s| !s.is_empty()).map(String::from);

        let environment = environment
            .filter(|s| !s.is_empty())
            .map(String::from)
            .unwrap_or_else(|| "local".to_string());

        Config {
            port,
            frontend_origin,
            sentry_dsn,
            environment,
        }
    }
}
