//! Category maintenance.

use crate::error::AppError;
use crate::response::message_ok;
use crate::state::AppState;
use axum::extract::{Path, State};

/// PUT /categories/:categoryId/products — rebuilds the whole join table; the category id is not used.
pub async fn rebuild_links(
    State(state): State<AppState>,
    Path(_category_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    state.store.rebuild_product_categories().await?;
    Ok(message_ok("product categories rebuilt"))
}
