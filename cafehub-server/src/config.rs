//! Server configuration

use crate::BoxError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_host: String,
    /// Port the HTTP server binds to
    pub bind_port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Base URL of the JSON API the cafe listing page consumes
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let bind_host = std::env::var("BIND_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let bind_port = match std::env::var("BIND_PORT") {
            Ok(p) => p.parse().map_err(|_| format!("invalid BIND_PORT: {p}"))?,
            Err(_) => 9998,
        };
        // The API lives in the same process, so the default upstream is ourselves.
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| format!("http://{bind_host}:{bind_port}"));

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cafes.db?mode=rwc".into()),
            bind_host,
            bind_port,
            api_base_url,
        })
    }
}
