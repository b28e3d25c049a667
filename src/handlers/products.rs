//! Product handlers: listing, lookup, search, category listing, create, update, delete.

use crate::error::AppError;
use crate::extractors::EntityId;
use crate::model::{ProductFilter, ProductInput};
use crate::response::{created_product, deleted_count, message_ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// Optional numeric query parameter; blank counts as absent.
fn parse_price(params: &HashMap<String, String>, key: &str) -> Result<Option<f64>, AppError> {
    match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("{} must be a number", key))),
    }
}

/// GET /products?minPrice=&maxPrice=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let filter = ProductFilter {
        min_price: parse_price(&params, "minPrice")?,
        max_price: parse_price(&params, "maxPrice")?,
    };
    Ok(Json(state.store.list_products(&filter).await?))
}

/// GET /products/:id
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Value>, AppError> {
    let product = state
        .store
        .product_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(Json(product))
}

/// GET /products/search?name=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let term = RequestValidator::search_term(params.get("name").map(String::as_str))?;
    Ok(Json(state.store.search_products(term).await?))
}

/// GET /products/category/:categoryId
pub async fn by_category(
    State(state): State<AppState>,
    EntityId(category_id): EntityId,
) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.store.products_by_category(category_id).await?))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ProductInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::product(&body)?;
    let product_id = state.store.create_product(&body).await?;
    Ok(created_product(product_id))
}

/// PUT /products/:id
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(body): Json<ProductInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::product(&body)?;
    if state.store.update_product(id, &body).await? == 0 {
        return Err(AppError::NotFound(format!("product {}", id)));
    }
    Ok(message_ok("product updated"))
}

/// DELETE /products/:id
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if state.store.delete_product(id).await? == 0 {
        return Err(AppError::NotFound(format!("product {}", id)));
    }
    Ok(message_ok("product deleted"))
}

/// DELETE /products/:id/reviews
pub async fn delete_reviews(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let deleted = state.store.delete_product_reviews(id).await?;
    Ok(deleted_count("reviews deleted", deleted))
}
