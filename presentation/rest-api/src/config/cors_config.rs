use poem::middleware::Cors;
use std::env;

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Cross-origin policy for browser callers
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Load CORS configuration from environment variables
    ///
    /// Environment variables:
    /// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
    ///   (default: "http://localhost:3000")
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

        Self::from_origins(&allowed_origins)
    }

    /// Parse a comma-separated origin list, ignoring blanks
    pub fn from_origins(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self { allowed_origins }
    }

    /// Build the CORS middleware
    ///
    /// Configuration:
    /// - Origins: only the configured ones, everything else is rejected
    /// - Methods and headers: not restricted, so poem allows any
    /// - Credentials: Enabled
    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origins(self.allowed_origins.iter().map(String::as_str))
            .allow_credentials(true)
    }
}
