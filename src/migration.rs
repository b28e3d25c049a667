//! Rebuild of the `products_categories` join table with ON UPDATE CASCADE foreign keys.
//! SQLite cannot alter constraints in place, so the table is recreated under a temporary name,
//! filled, and swapped in. All steps share one transaction.

use crate::error::AppError;
use sqlx::SqlitePool;

const REBUILD_TABLE: &str = "products_categories_rebuild";

const PREPARE: &[&str] = &[
    "DROP TABLE IF EXISTS products_categories_rebuild",
    r#"
    CREATE TABLE products_categories_rebuild (
        id INTEGER PRIMARY KEY,
        product_id INTEGER,
        category_id INTEGER,
        FOREIGN KEY (product_id) REFERENCES products (product_id) ON UPDATE CASCADE,
        FOREIGN KEY (category_id) REFERENCES categories (category_id) ON UPDATE CASCADE
    )
    "#,
];

const COPY_ROWS: &str = "INSERT INTO products_categories_rebuild (id, product_id, category_id) \
     SELECT id, product_id, category_id FROM products_categories";

const SWAP: &[&str] = &[
    "DROP TABLE products_categories",
    "ALTER TABLE products_categories_rebuild RENAME TO products_categories",
];

/// Recreate `products_categories` keeping every row. Returns the number of rows carried over.
/// On any failure the transaction rolls back and the original table is untouched.
pub async fn rebuild_products_categories(pool: &SqlitePool) -> Result<u64, AppError> {
    tracing::info!(table = "products_categories", via = REBUILD_TABLE, "rebuilding join table");
    let mut tx = pool.begin().await?;
    for sql in PREPARE {
        tracing::debug!(sql = %sql, "rebuild step");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    let copied = sqlx::query(COPY_ROWS).execute(&mut *tx).await?.rows_affected();
    for sql in SWAP {
        tracing::debug!(sql = %sql, "rebuild step");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(rows = copied, "join table rebuilt");
    Ok(copied)
}
