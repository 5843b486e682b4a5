//! JSON API routes

pub mod cafes;
pub mod health;

use axum::Router;
use axum::routing::{get, patch, post};

use crate::state::AppState;

/// Router for the JSON API surface
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(cafes::all))
        .route("/random", get(cafes::random))
        .route("/addcafe", post(cafes::add))
        .route("/update-price/{id}", patch(cafes::update_price))
        .route("/deletecafe/{id}", get(cafes::delete))
        .route("/health", get(health::health_check))
}
