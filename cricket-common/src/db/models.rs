//! Database models
//!
//! JSON field names follow the public HTTP contract: list entries use
//! camelCase (`playerId`, `matchId`), while score totals keep the
//! snake_case `player_id` / `player_name` columns next to camelCase totals.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, ValueRef};
use std::fmt;

/// Primary key value of a player or match row
///
/// Keys are stored as INTEGER in the usual schema, but TEXT keys decode too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Integer(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Integer(value) => write!(f, "{}", value),
            RecordKey::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        RecordKey::Integer(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey::Text(value.to_string())
    }
}

impl Type<Sqlite> for RecordKey {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <i64 as Type<Sqlite>>::compatible(ty) || <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for RecordKey {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let is_integer = <i64 as Type<Sqlite>>::compatible(&value.type_info());
        if is_integer {
            Ok(RecordKey::Integer(<i64 as Decode<Sqlite>>::decode(value)?))
        } else {
            Ok(RecordKey::Text(<String as Decode<Sqlite>>::decode(value)?))
        }
    }
}

/// Scalar column value of unknown storage class
///
/// Stored values keep their storage class: an INTEGER stays a JSON integer,
/// REAL a JSON float and TEXT a JSON string, whatever the declared type of
/// the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Integer(value)
    }
}

impl Type<Sqlite> for ColumnValue {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <i64 as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
            || <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for ColumnValue {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let type_info = value.type_info();
        if <i64 as Type<Sqlite>>::compatible(&type_info) {
            Ok(ColumnValue::Integer(<i64 as Decode<Sqlite>>::decode(value)?))
        } else if <f64 as Type<Sqlite>>::compatible(&type_info) {
            Ok(ColumnValue::Real(<f64 as Decode<Sqlite>>::decode(value)?))
        } else {
            Ok(ColumnValue::Text(<String as Decode<Sqlite>>::decode(value)?))
        }
    }
}

/// Entry of `GET /players/` and `GET /matches/{id}/players`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerSummary {
    #[serde(rename = "playerId")]
    pub player_id: RecordKey,
    #[serde(rename = "playerName")]
    pub player_name: Option<String>,
}

/// Entry of `GET /players/{id}/matches`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MatchSummary {
    #[serde(rename = "matchId")]
    pub match_id: RecordKey,
    #[serde(rename = "match")]
    #[sqlx(rename = "match")]
    pub match_label: Option<String>,
    pub year: Option<ColumnValue>,
}

/// Aggregate statistics summed across all of a player's score rows
///
/// Sums stay integers unless a REAL score is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerScoreTotals {
    pub player_id: RecordKey,
    pub player_name: Option<String>,
    #[serde(rename = "totalScore")]
    pub total_score: ColumnValue,
    #[serde(rename = "totalFours")]
    pub total_fours: ColumnValue,
    #[serde(rename = "totalSixes")]
    pub total_sixes: ColumnValue,
}

/// Body of `PUT /players/{id}/`
///
/// `playerName` is taken as any JSON value and coerced by the store. A
/// missing or null `playerName` reaches the store as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayerRequest {
    #[serde(rename = "playerName", default)]
    pub player_name: Option<serde_json::Value>,
}
