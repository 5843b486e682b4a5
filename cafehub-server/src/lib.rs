//! Cafehub: cafe directory web app with a mirrored JSON API
//!
//! One process serves both surfaces:
//!
//! - **Pages** (`web`): landing page, cafe listing, add-cafe form
//! - **JSON API** (`api`): `/all`, `/random`, `/addcafe`, `/update-price/{id}`,
//!   `/deletecafe/{id}`, `/health`
//! - **Storage** (`db`): one `cafes` table in a SQLite file
//!
//! `main.rs` wires configuration, state and the routers together.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod web;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Boxed error used at startup seams
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Assemble the full application router (pages + JSON API)
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(web::router())
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
