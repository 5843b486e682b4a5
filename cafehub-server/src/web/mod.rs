//! Browser-facing routes

pub mod form;
pub mod pages;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Router for the server-rendered pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/cafes", get(pages::cafes))
        .route("/add", get(pages::add_form).post(pages::add_submit))
        .route("/delete/{id}", get(pages::delete))
}
