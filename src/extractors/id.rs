//! Extract a numeric entity id from the single path parameter of a route.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer id from routes such as `/products/:id` or `/customers/:id/orders`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i64>()
            .map(EntityId)
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", raw)))
    }
}
