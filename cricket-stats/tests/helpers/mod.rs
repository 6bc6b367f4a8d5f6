//! Shared helpers for cricket-stats integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Tables of the pre-existing store
pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Create a store file with the cricket schema, run `seed`, then open it
/// through the service's own connection path.
///
/// Returns (TempDir, SqlitePool) - TempDir must be kept alive for duration of test
pub async fn create_test_db(seed: &str) -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("cricketMatchDetails.db");

    let init = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&db_path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test database");
    sqlx::raw_sql(SCHEMA).execute(&init).await.expect("Schema creation failed");
    if !seed.trim().is_empty() {
        sqlx::raw_sql(seed).execute(&init).await.expect("Seeding failed");
    }
    init.close().await;

    let pool = cricket_stats::db::connect(&db_path)
        .await
        .expect("Should connect to test database");

    (temp_dir, pool)
}

/// Standard data set: three players, three matches, four score rows
pub const STANDARD_SEED: &str = r#"
    INSERT INTO player_details (player_id, player_name) VALUES
        (1, 'Virat'), (2, 'Rohit'), (3, 'Bumrah');
    INSERT INTO match_details (match_id, "match", year) VALUES
        (1, 'Mumbai', 2011), (2, 'Chennai', 2014), (3, 'Delhi', 2019);
    INSERT INTO player_match_score (player_id, match_id, score, fours, sixes) VALUES
        (1, 1, 50, 4, 1),
        (1, 2, 30, 2, 0),
        (2, 1, 12, 1, 1),
        (2, 3, 101, 9, 4);
"#;

/// Build a request with an empty body
pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request carrying a JSON body
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request carrying `body` verbatim under the given content type
pub fn raw_request(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read the whole response body
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

/// Read the response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Should parse JSON")
}

/// Sort a JSON array of objects by one numeric field
pub fn sorted_by(mut value: Value, field: &str) -> Vec<Value> {
    let items = value.as_array_mut().expect("Expected JSON array");
    items.sort_by_key(|item| item[field].as_i64().unwrap_or_default());
    items.clone()
}
