//! Conversion between untyped SQLite values and JSON
//!
//! Full-row lookups return every stored column, including columns this
//! service knows nothing about, so they are converted column by column.
//! Client-supplied JSON scalars are bound without validation and left to
//! the column affinity.

use cricket_common::db::ColumnValue;
use serde_json::{json, Map, Value};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Row};

/// Convert a row into a JSON object keyed by column name
///
/// TEXT, INTEGER and REAL map to their JSON counterparts; NULL and BLOB
/// values become `null`.
pub fn row_to_json(row: &SqliteRow) -> Map<String, Value> {
    row.columns()
        .iter()
        .map(|column| {
            let i = column.ordinal();
            (column.name().to_string(), column_value(row, i))
        })
        .collect()
}

fn column_value(row: &SqliteRow, i: usize) -> Value {
    match row.try_get::<Option<ColumnValue>, _>(i) {
        Ok(Some(ColumnValue::Integer(v))) => json!(v),
        Ok(Some(ColumnValue::Real(v))) => json!(v),
        Ok(Some(ColumnValue::Text(v))) => Value::String(v),
        // NULL, or BLOB which has no JSON form
        Ok(None) | Err(_) => Value::Null,
    }
}

/// Bind a JSON value as the next statement parameter
///
/// Strings bind as TEXT, numbers as INTEGER or REAL, booleans as 0/1 and
/// null as NULL. Arrays and objects bind as their JSON text.
pub fn bind_json<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q Value,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => query.bind(n.as_f64()),
        },
        Value::String(s) => query.bind(s.as_str()),
        other => query.bind(other.to_string()),
    }
}
