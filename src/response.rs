//! Success bodies for mutating endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: &'static str,
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    /// Rows removed, for bulk deletes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

pub fn message_ok(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message,
            product_id: None,
            deleted: None,
        }),
    )
}

pub fn created_product(product_id: i64) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::CREATED,
        Json(MessageBody {
            message: "product created",
            product_id: Some(product_id),
            deleted: None,
        }),
    )
}

pub fn deleted_count(message: &'static str, deleted: u64) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message,
            product_id: None,
            deleted: Some(deleted),
        }),
    )
}
