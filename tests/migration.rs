mod common;

use axum::http::StatusCode;
use common::{count, empty_pool, seed, send, settings_for, setup};
use sqlx::SqlitePool;
use techgear_shop::{connect, ensure_schema, rebuild_products_categories};

async fn link_rows(pool: &SqlitePool) -> Vec<(i64, i64, i64)> {
    sqlx::query_as("SELECT id, product_id, category_id FROM products_categories ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn rebuild_twice_keeps_row_set() {
    let (pool, _dir) = empty_pool().await;
    seed(&pool).await;
    let before = link_rows(&pool).await;

    assert_eq!(rebuild_products_categories(&pool).await.unwrap(), 3);
    assert_eq!(rebuild_products_categories(&pool).await.unwrap(), 3);

    assert_eq!(link_rows(&pool).await, before);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM sqlite_master WHERE name = 'products_categories_rebuild'").await,
        0
    );
}

#[tokio::test]
async fn rebuilt_links_follow_category_key_updates() {
    let (pool, _dir) = empty_pool().await;
    seed(&pool).await;

    // Plain foreign keys refuse to re-key a referenced category.
    let refused = sqlx::query("UPDATE categories SET category_id = 10 WHERE category_id = 1")
        .execute(&pool)
        .await;
    assert!(refused.is_err());

    rebuild_products_categories(&pool).await.unwrap();
    sqlx::query("UPDATE categories SET category_id = 10 WHERE category_id = 1")
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM products_categories WHERE category_id = 10").await,
        2
    );
}

#[tokio::test]
async fn failed_rebuild_leaves_original_table() {
    let dir = tempfile::tempdir().unwrap();
    let pool = connect(&settings_for(&dir)).await.unwrap();
    // A legacy join table without the `id` column makes the copy step fail after the new table exists.
    sqlx::query("CREATE TABLE products_categories (product_id INTEGER, category_id INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO products_categories (product_id, category_id) VALUES (1, 1), (2, 2)")
        .execute(&pool)
        .await
        .unwrap();

    assert!(rebuild_products_categories(&pool).await.is_err());

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM products_categories").await, 2);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM sqlite_master WHERE name = 'products_categories_rebuild'").await,
        0
    );
}

#[tokio::test]
async fn endpoint_ignores_category_id_and_rebuilds() {
    let shop = setup().await;
    let before = link_rows(&shop.pool).await;
    let (status, body) = send(&shop.app, "PUT", "/categories/7/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "product categories rebuilt");
    assert_eq!(link_rows(&shop.pool).await, before);
}
