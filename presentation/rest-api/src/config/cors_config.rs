use poem::middleware::Cors;

use super::read_var;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// CORS settings: a single allowed origin, credentials enabled.
///
/// Environment variables:
/// - REACT_APP_FRONTEND_URL: Allowed origin (default: "http://localhost:5173")
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub frontend_url: String,
}

impl CorsConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            frontend_url: read_var(lookup, "REACT_APP_FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
        }
    }

    /// Initialize CORS middleware for cross-origin requests
    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origin(self.frontend_url.as_str())
            .allow_credentials(true)
    }
}
