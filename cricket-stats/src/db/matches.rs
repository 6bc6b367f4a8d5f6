//! Match queries

use cricket_common::db::PlayerSummary;
use cricket_common::Result;
use serde_json::{Map, Value};
use sqlx::SqlitePool;

use super::row_to_json;

/// Full `match_details` row, every column included
pub async fn get_match(pool: &SqlitePool, match_id: &str) -> Result<Option<Map<String, Value>>> {
    let row = sqlx::query("SELECT * FROM match_details WHERE match_id = ?")
        .bind(match_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_json))
}

/// Players with a score row for the match, one entry per score row
pub async fn match_players(pool: &SqlitePool, match_id: &str) -> Result<Vec<PlayerSummary>> {
    let players = sqlx::query_as::<_, PlayerSummary>(
        r#"
        SELECT player_details.player_id, player_details.player_name
        FROM player_match_score
        JOIN player_details ON player_match_score.player_id = player_details.player_id
        WHERE player_match_score.match_id = ?
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await?;

    Ok(players)
}
