//! Player queries
//!
//! Ids arrive as path text and are bound as text; SQLite's INTEGER column
//! affinity converts them for comparison.

use cricket_common::db::{MatchSummary, PlayerScoreTotals, PlayerSummary};
use cricket_common::Result;
use serde_json::{Map, Value};
use sqlx::SqlitePool;

use super::{bind_json, row_to_json};

/// All players as `{playerId, playerName}`
pub async fn list_players(pool: &SqlitePool) -> Result<Vec<PlayerSummary>> {
    let players = sqlx::query_as::<_, PlayerSummary>(
        "SELECT player_id, player_name FROM player_details",
    )
    .fetch_all(pool)
    .await?;

    Ok(players)
}

/// Full `player_details` row, every column included
pub async fn get_player(pool: &SqlitePool, player_id: &str) -> Result<Option<Map<String, Value>>> {
    let row = sqlx::query("SELECT * FROM player_details WHERE player_id = ?")
        .bind(player_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_json))
}

/// Set a player's name, returning the number of rows changed
///
/// The name is bound as given (`null` stores NULL) and coerced by the
/// column affinity. Zero changed rows is not an error.
pub async fn update_player_name(
    pool: &SqlitePool,
    player_id: &str,
    player_name: &Value,
) -> Result<u64> {
    let query = sqlx::query("UPDATE player_details SET player_name = ? WHERE player_id = ?");
    let result = bind_json(query, player_name)
        .bind(player_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Matches the player has a score row for, one entry per score row
pub async fn player_matches(pool: &SqlitePool, player_id: &str) -> Result<Vec<MatchSummary>> {
    let matches = sqlx::query_as::<_, MatchSummary>(
        r#"
        SELECT match_details.match_id, match_details."match", match_details.year
        FROM player_match_score
        JOIN match_details ON player_match_score.match_id = match_details.match_id
        WHERE player_match_score.player_id = ?
        "#,
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

/// Score, fours and sixes summed across the player's score rows
///
/// `None` when the player has no score rows.
pub async fn player_score_totals(
    pool: &SqlitePool,
    player_id: &str,
) -> Result<Option<PlayerScoreTotals>> {
    let totals = sqlx::query_as::<_, PlayerScoreTotals>(
        r#"
        SELECT player_details.player_id AS player_id,
               player_details.player_name AS player_name,
               COALESCE(SUM(player_match_score.score), 0) AS total_score,
               COALESCE(SUM(player_match_score.fours), 0) AS total_fours,
               COALESCE(SUM(player_match_score.sixes), 0) AS total_sixes
        FROM player_match_score
        JOIN player_details ON player_match_score.player_id = player_details.player_id
        WHERE player_match_score.player_id = ?
        GROUP BY player_match_score.player_id
        "#,
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;

    Ok(totals)
}
