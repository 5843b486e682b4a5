//! Application state

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::BoxError;
use crate::config::Config;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// HTTP client used by the cafe listing page to call the JSON API
    pub http: reqwest::Client,
    /// Base URL of the JSON API
    pub api_base_url: String,
}

impl AppState {
    /// Create a new AppState: connect the pool, run migrations, build the client
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            pool,
            http,
            api_base_url: config.api_base_url.clone(),
        })
    }
}
