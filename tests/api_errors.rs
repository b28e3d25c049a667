mod common;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::send;
use serde_json::Value;
use techgear_shop::model::{ContactInput, ProductFilter, ProductInput};
use techgear_shop::{app, AppError, AppState, ShopStore};
use tower::ServiceExt;

/// Store whose every call fails as if the database were gone.
struct UnavailableStore;

fn gone<T>() -> Result<T, AppError> {
    Err(AppError::Db(sqlx::Error::PoolClosed))
}

#[async_trait]
impl ShopStore for UnavailableStore {
    async fn list_products(&self, _: &ProductFilter) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn product_by_id(&self, _: i64) -> Result<Option<Value>, AppError> {
        gone()
    }
    async fn search_products(&self, _: &str) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn products_by_category(&self, _: i64) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn create_product(&self, _: &ProductInput) -> Result<i64, AppError> {
        gone()
    }
    async fn update_product(&self, _: i64, _: &ProductInput) -> Result<u64, AppError> {
        gone()
    }
    async fn delete_product(&self, _: i64) -> Result<u64, AppError> {
        gone()
    }
    async fn delete_product_reviews(&self, _: i64) -> Result<u64, AppError> {
        gone()
    }
    async fn customer_by_id(&self, _: i64) -> Result<Option<Value>, AppError> {
        gone()
    }
    async fn update_customer_contact(&self, _: i64, _: &ContactInput) -> Result<u64, AppError> {
        gone()
    }
    async fn orders_for_customer(&self, _: i64) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn product_stats(&self) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn review_stats(&self) -> Result<Vec<Value>, AppError> {
        gone()
    }
    async fn rebuild_product_categories(&self) -> Result<u64, AppError> {
        gone()
    }
    async fn ping(&self) -> Result<(), AppError> {
        gone()
    }
}

fn failing_app() -> axum::Router {
    app(AppState::new(UnavailableStore), 64 * 1024)
}

#[tokio::test]
async fn storage_failures_map_to_500_with_message() {
    let app = failing_app();
    for (method, uri) in [
        ("GET", "/products"),
        ("GET", "/products/1"),
        ("GET", "/products/search?name=usb"),
        ("GET", "/customers/1"),
        ("GET", "/products/stats"),
        ("GET", "/reviews/stats"),
        ("DELETE", "/products/1"),
        ("PUT", "/categories/1/products"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(body["error"]["code"], "database_error");
        assert!(body["error"]["message"].as_str().unwrap().starts_with("database:"));
    }
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let app = failing_app();
    let (status, _) = send(&app, "GET", "/products/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "GET", "/customers/x/orders", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn readiness_reflects_store_and_health_does_not() {
    let app = failing_app();
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "techgear-shop");
}

#[tokio::test]
async fn root_greets_in_plain_text() {
    let response = failing_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"TechGear web shop API");
}
