#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use techgear_shop::{app, connect, ensure_schema, AppState, Settings, SqliteShop};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestShop {
    pub app: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

const SEED: &[&str] = &[
    "INSERT INTO manufacturers (manufacturer_id, name) VALUES (1, 'Logitech'), (2, 'Anker')",
    "INSERT INTO categories (category_id, name) VALUES (1, 'Accessories'), (2, 'Cables'), (3, 'Audio')",
    "INSERT INTO products (product_id, manufacturer_id, name, description, price, stock_quantity) VALUES
        (1, 1, 'Wireless Mouse', 'Silent clicks', 299.0, 40),
        (2, 2, 'USB-C Cable', '2m braided', 149.0, 100),
        (3, 1, 'Gaming Keyboard', 'RGB', 899.0, 15),
        (4, 1, 'Mouse Pad', 'Cloth', 99.0, 10)",
    "INSERT INTO products_categories (id, product_id, category_id) VALUES (1, 1, 1), (2, 2, 2), (3, 3, 1)",
    "INSERT INTO customers (customer_id, name, email, phone, address, password) VALUES
        (1, 'Anna Svensson', 'anna@example.se', '070-111', 'Storgatan 1', 'hunter2'),
        (2, 'Erik Berg', 'erik@example.se', '070-222', 'Lillgatan 2', 'secret')",
    "INSERT INTO orders (order_id, customer_id, order_date) VALUES (1, 1, '2024-03-01'), (2, 1, '2024-04-15')",
    "INSERT INTO orders_products (id, order_id, product_id, quantity, unit_price) VALUES
        (1, 1, 1, 2, 299.0), (2, 1, 2, 1, 149.0), (3, 2, 3, 1, 899.0)",
    "INSERT INTO reviews (review_id, product_id, rating, comment) VALUES
        (1, 1, 5, 'Great'), (2, 1, 3, 'Ok'), (3, 2, 4, 'Solid'), (4, 4, 2, 'Thin')",
];

pub fn settings_for(dir: &TempDir) -> Settings {
    Settings {
        database_url: format!("sqlite://{}", dir.path().join("shop.db").display()),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        max_connections: 2,
        body_limit_bytes: 64 * 1024,
    }
}

/// Empty database file with the shop schema applied.
pub async fn empty_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = connect(&settings_for(&dir)).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    (pool, dir)
}

pub async fn seed(pool: &SqlitePool) {
    for sql in SEED {
        sqlx::query(sql).execute(pool).await.unwrap();
    }
}

pub async fn setup() -> TestShop {
    let (pool, dir) = empty_pool().await;
    seed(&pool).await;
    let state = AppState::new(SqliteShop::new(pool.clone()));
    TestShop {
        app: app(state, 64 * 1024),
        pool,
        _dir: dir,
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn count(pool: &SqlitePool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}
