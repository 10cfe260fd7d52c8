//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CORS_ALLOWED_ORIGIN: {0}")]
    InvalidOrigin(String),
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_allowed_origin: HeaderValue,
    /// When false the server exposes only the API and health routes.
    pub serve_frontend: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CORS_ALLOWED_ORIGIN`: default `http://localhost:5173`
    /// - `SERVE_FRONTEND`: default true
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_owned());
        let cors_allowed_origin =
            HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;

        let serve_frontend = env_flag("SERVE_FRONTEND", true)?;

        Ok(Self { port, cors_allowed_origin, serve_frontend })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => env_bool(key).ok_or(ConfigError::InvalidBool { var: key, value }),
    }
}
