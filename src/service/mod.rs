//! Data access behind the `ShopStore` trait so handlers never touch the pool directly.

mod rows;
mod shop;
mod validation;

pub use shop::SqliteShop;
pub use validation::RequestValidator;

use crate::error::AppError;
use crate::model::{ContactInput, ProductFilter, ProductInput};
use async_trait::async_trait;
use serde_json::Value;

/// Storage client used by every handler. Row-returning methods hand back JSON objects keyed by SQL alias;
/// mutating methods return rows affected so the caller decides what "not found" means.
#[async_trait]
pub trait ShopStore: Send + Sync {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Value>, AppError>;
    async fn product_by_id(&self, id: i64) -> Result<Option<Value>, AppError>;
    async fn search_products(&self, term: &str) -> Result<Vec<Value>, AppError>;
    async fn products_by_category(&self, category_id: i64) -> Result<Vec<Value>, AppError>;
    /// Returns the generated product id.
    async fn create_product(&self, input: &ProductInput) -> Result<i64, AppError>;
    async fn update_product(&self, id: i64, input: &ProductInput) -> Result<u64, AppError>;
    /// Deletes the product's reviews then the product, atomically.
    async fn delete_product(&self, id: i64) -> Result<u64, AppError>;
    async fn delete_product_reviews(&self, product_id: i64) -> Result<u64, AppError>;

    async fn customer_by_id(&self, id: i64) -> Result<Option<Value>, AppError>;
    async fn update_customer_contact(&self, id: i64, contact: &ContactInput) -> Result<u64, AppError>;
    async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Value>, AppError>;

    async fn product_stats(&self) -> Result<Vec<Value>, AppError>;
    async fn review_stats(&self) -> Result<Vec<Value>, AppError>;

    /// Rebuild the product/category join table; returns rows carried over.
    async fn rebuild_product_categories(&self) -> Result<u64, AppError>;
    /// Cheap connectivity check for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
