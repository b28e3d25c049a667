//! `ShopStore` over a SQLite pool.

use super::rows::{execute, execute_tx, expand_json_column, query_many, query_optional};
use super::ShopStore;
use crate::error::AppError;
use crate::migration::rebuild_products_categories;
use crate::model::{ContactInput, ProductFilter, ProductInput};
use crate::sql::{
    delete_product, delete_reviews_for_product, insert_product, price_predicates, product_stats, review_stats,
    select_customer_with_orders, select_orders_for_customer, select_products, update_customer_contact, update_product,
    ProductPredicate,
};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqliteShop {
    pool: SqlitePool,
}

impl SqliteShop {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteShop { pool }
    }
}

#[async_trait]
impl ShopStore for SqliteShop {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Value>, AppError> {
        let q = select_products(&price_predicates(filter));
        query_many(&self.pool, &q).await
    }

    async fn product_by_id(&self, id: i64) -> Result<Option<Value>, AppError> {
        let q = select_products(&[ProductPredicate::Id(id)]);
        query_optional(&self.pool, &q).await
    }

    async fn search_products(&self, term: &str) -> Result<Vec<Value>, AppError> {
        let q = select_products(&[ProductPredicate::NameContains(term.to_string())]);
        query_many(&self.pool, &q).await
    }

    async fn products_by_category(&self, category_id: i64) -> Result<Vec<Value>, AppError> {
        let q = select_products(&[ProductPredicate::Category(category_id)]);
        query_many(&self.pool, &q).await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<i64, AppError> {
        let (_, product_id) = execute(&self.pool, &insert_product(input)).await?;
        tracing::info!(product_id, "product created");
        Ok(product_id)
    }

    async fn update_product(&self, id: i64, input: &ProductInput) -> Result<u64, AppError> {
        let (affected, _) = execute(&self.pool, &update_product(id, input)).await?;
        Ok(affected)
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let reviews = execute_tx(&mut tx, &delete_reviews_for_product(id)).await?;
        let affected = execute_tx(&mut tx, &delete_product(id)).await?;
        if affected == 0 {
            tx.rollback().await?;
            return Ok(0);
        }
        tx.commit().await?;
        tracing::info!(product_id = id, reviews, "product deleted");
        Ok(affected)
    }

    async fn delete_product_reviews(&self, product_id: i64) -> Result<u64, AppError> {
        let (affected, _) = execute(&self.pool, &delete_reviews_for_product(product_id)).await?;
        Ok(affected)
    }

    async fn customer_by_id(&self, id: i64) -> Result<Option<Value>, AppError> {
        let row = query_optional(&self.pool, &select_customer_with_orders(id)).await?;
        Ok(row.map(|mut r| {
            expand_json_column(&mut r, "Orders");
            r
        }))
    }

    async fn update_customer_contact(&self, id: i64, contact: &ContactInput) -> Result<u64, AppError> {
        let (affected, _) = execute(&self.pool, &update_customer_contact(id, contact)).await?;
        Ok(affected)
    }

    async fn orders_for_customer(&self, customer_id: i64) -> Result<Vec<Value>, AppError> {
        query_many(&self.pool, &select_orders_for_customer(customer_id)).await
    }

    async fn product_stats(&self) -> Result<Vec<Value>, AppError> {
        query_many(&self.pool, &product_stats()).await
    }

    async fn review_stats(&self) -> Result<Vec<Value>, AppError> {
        query_many(&self.pool, &review_stats()).await
    }

    async fn rebuild_product_categories(&self) -> Result<u64, AppError> {
        rebuild_products_categories(&self.pool).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
