//! Statement execution and SQLite row decoding into JSON.

use crate::error::AppError;
use crate::sql::{QueryBuf, SqliteBindValue};
use serde_json::Value;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

fn bound(q: &QueryBuf) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(SqliteBindValue::from_json(p));
    }
    query
}

pub(crate) async fn query_many(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let rows = bound(q).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_json).collect())
}

pub(crate) async fn query_optional(pool: &SqlitePool, q: &QueryBuf) -> Result<Option<Value>, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let row = bound(q).fetch_optional(pool).await?;
    Ok(row.map(|r| row_to_json(&r)))
}

/// Execute and return (rows affected, last insert rowid).
pub(crate) async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<(u64, i64), AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
    let done = bound(q).execute(pool).await?;
    Ok((done.rows_affected(), done.last_insert_rowid()))
}

pub(crate) async fn execute_tx(conn: &mut SqliteConnection, q: &QueryBuf) -> Result<u64, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "execute (tx)");
    let done = bound(q).execute(&mut *conn).await?;
    Ok(done.rows_affected())
}

pub(crate) fn row_to_json(row: &SqliteRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// SQLite is dynamically typed; decode by the stored value's runtime type.
fn cell_to_value(row: &SqliteRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}

/// Replace a JSON-array text column (e.g. from JSON_GROUP_ARRAY) with the parsed array.
pub(crate) fn expand_json_column(row: &mut Value, column: &str) {
    let Some(obj) = row.as_object_mut() else { return };
    if let Some(Value::String(raw)) = obj.get(column) {
        match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => {
                obj.insert(column.to_string(), parsed);
            }
            Err(e) => tracing::warn!(column = %column, error = %e, "column is not valid JSON; left as text"),
        }
    }
}
