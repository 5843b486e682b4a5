//! Cafe API handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{CafeCreate, CafeEnvelope, CafeList};
use crate::state::AppState;

/// GET /all - every cafe, in id order
pub async fn all(State(state): State<AppState>) -> AppResult<Json<CafeList>> {
    let cafes = db::cafes::list_all(&state.pool).await?;
    Ok(Json(CafeList { cafes }))
}

/// GET /random - one cafe chosen uniformly at random
pub async fn random(State(state): State<AppState>) -> AppResult<Json<CafeEnvelope>> {
    let cafe = db::cafes::random(&state.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Sorry, there are no cafes in the database."))?;
    Ok(Json(CafeEnvelope { cafe }))
}

/// POST /addcafe - create a cafe from a JSON body
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<CafeCreate>,
) -> AppResult<Json<serde_json::Value>> {
    payload.check().map_err(AppError::from_violations)?;
    db::cafes::insert(&state.pool, &payload).await?;
    Ok(success("Successfully added the new cafe."))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: String,
}

/// PATCH /update-price/{id} - set coffee_price from the query string
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> AppResult<Json<serde_json::Value>> {
    let updated = db::cafes::update_price(&state.pool, id, &params.new_price).await?;
    if !updated {
        return Err(AppError::cafe_not_found());
    }
    Ok(success("Successfully updated the price."))
}

/// GET /deletecafe/{id} - remove a cafe
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = db::cafes::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::cafe_not_found());
    }
    Ok(success("Successfully deleted the cafe."))
}

fn success(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "response": { "success": message } }))
}
