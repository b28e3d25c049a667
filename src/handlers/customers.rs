//! Customer handlers.

use crate::error::AppError;
use crate::extractors::EntityId;
use crate::model::ContactInput;
use crate::response::message_ok;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// GET /customers/:id — customer with nested `Orders`.
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Value>, AppError> {
    let customer = state
        .store
        .customer_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(Json(customer))
}

/// PUT /customers/:id — email, phone and address only.
pub async fn update_contact(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Json(body): Json<ContactInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::contact(&body)?;
    if state.store.update_customer_contact(id, &body).await? == 0 {
        return Err(AppError::NotFound(format!("customer {}", id)));
    }
    Ok(message_ok("customer updated"))
}

/// GET /customers/:id/orders
pub async fn orders(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(state.store.orders_for_customer(id).await?))
}
