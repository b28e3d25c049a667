//! Aggregate statistics.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// GET /products/stats
pub async fn products(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.store.product_stats().await?))
}

/// GET /reviews/stats
pub async fn reviews(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.store.review_stats().await?))
}
