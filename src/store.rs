//! Pool construction and base schema DDL for the shop database.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Tables in dependency order. `products_categories` starts with plain foreign keys;
/// `migration::rebuild_products_categories` upgrades it to ON UPDATE CASCADE.
const SCHEMA: &[(&str, &str)] = &[
    (
        "manufacturers",
        r#"
        CREATE TABLE IF NOT EXISTS manufacturers (
            manufacturer_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            category_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY,
            manufacturer_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            stock_quantity INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (manufacturer_id) REFERENCES manufacturers (manufacturer_id) ON UPDATE CASCADE
        )
        "#,
    ),
    (
        "products_categories",
        r#"
        CREATE TABLE IF NOT EXISTS products_categories (
            id INTEGER PRIMARY KEY,
            product_id INTEGER,
            category_id INTEGER,
            FOREIGN KEY (product_id) REFERENCES products (product_id),
            FOREIGN KEY (category_id) REFERENCES categories (category_id)
        )
        "#,
    ),
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            customer_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            address TEXT,
            password TEXT
        )
        "#,
    ),
    (
        "orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            order_id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            order_date TEXT NOT NULL DEFAULT (date('now')),
            FOREIGN KEY (customer_id) REFERENCES customers (customer_id) ON UPDATE CASCADE
        )
        "#,
    ),
    (
        "orders_products",
        r#"
        CREATE TABLE IF NOT EXISTS orders_products (
            id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            unit_price REAL NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders (order_id) ON UPDATE CASCADE,
            FOREIGN KEY (product_id) REFERENCES products (product_id) ON UPDATE CASCADE
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            review_id INTEGER PRIMARY KEY,
            product_id INTEGER NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT,
            FOREIGN KEY (product_id) REFERENCES products (product_id) ON UPDATE CASCADE
        )
        "#,
    ),
];

/// Open a pool on `settings.database_url`, creating the file if missing. Foreign keys are enforced on every connection.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(database_url = %settings.database_url, "database pool ready");
    Ok(pool)
}

/// Create any missing shop tables. Existing tables are left as they are.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for (table, ddl) in SCHEMA {
        tracing::debug!(table = %table, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
