//! Database access layer for cricket-stats
//!
//! The store file and its tables already exist; this service never creates
//! or migrates them. Every query goes through one shared connection.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod matches;
pub mod players;
mod rows;

pub use rows::{bind_json, row_to_json};

/// How long a statement waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the pre-existing store with a single read/write connection
///
/// Fails when the file is missing rather than creating an empty store.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found: {}\nThe store file and its tables must exist before startup.",
            db_path.display()
        );
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .busy_timeout(BUSY_TIMEOUT);

    // One connection, so the pool serializes access like a single driver handle
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    Ok(pool)
}

/// Close the shared connection, waiting for checked-out connections to return
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("Database connection closed.");
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    /// Schema of the pre-existing store, shared with the integration tests
    pub const SCHEMA: &str = include_str!("../../tests/fixtures/schema.sql");

    pub const SEED: &str = r#"
        INSERT INTO player_details (player_id, player_name) VALUES
            (1, 'Virat'), (2, 'Rohit'), (3, 'Bumrah');
        INSERT INTO match_details (match_id, "match", year) VALUES
            (1, 'Mumbai', 2011), (2, 'Chennai', 2014), (3, 'Delhi', 2019);
        INSERT INTO player_match_score (player_id, match_id, score, fours, sixes) VALUES
            (1, 1, 50, 4, 1),
            (1, 2, 30, 2, 0),
            (2, 1, 12, 1, 1);
    "#;

    /// In-memory store with the cricket schema and a few rows
    pub async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("Schema creation failed");
        sqlx::raw_sql(SEED).execute(&pool).await.expect("Seeding failed");

        pool
    }
}
