//! Convert serde_json::Value to types that sqlx can bind.

use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite statement. Converts from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqliteBindValue {
    Null,
    I64(i64),
    F64(f64),
    Text(String),
}

impl SqliteBindValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqliteBindValue::Null,
            Value::Bool(b) => SqliteBindValue::I64(i64::from(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqliteBindValue::I64(i)
                } else if let Some(f) = n.as_f64() {
                    SqliteBindValue::F64(f)
                } else {
                    SqliteBindValue::Null
                }
            }
            Value::String(s) => SqliteBindValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => SqliteBindValue::Text(v.to_string()),
        }
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqliteBindValue::Null => Ok(IsNull::Yes),
            SqliteBindValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::F64(n) => <f64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
