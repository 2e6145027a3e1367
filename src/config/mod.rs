use std::env;

use crate::models::date_range::DateRangeKey;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub request_body_limit_bytes: usize,
    pub default_date_range: DateRangeKey,
}

impl AppConfig {
    /// Every variable has a default, so this only fails on a malformed
    /// `DEFAULT_DATE_RANGE`.
    pub fn from_env() -> Result<Self, crate::errors::AppError> {
        Ok(Self {
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            request_body_limit_bytes: env::var("REQUEST_BODY_LIMIT_BYTES")
                .unwrap_or_else(|_| "1048576".to_string())
                .parse()
                .unwrap_or(1_048_576),
            default_date_range: match env::var("DEFAULT_DATE_RANGE") {
                Ok(raw) => raw.parse()?,
                Err(_) => DateRangeKey::default(),
            },
        })
    }
}
