//! Match endpoints
//!
//! - GET /matches/:match_id/
//! - GET /matches/:match_id/players

use axum::{
    extract::{Path, State},
    Json,
};
use cricket_common::db::PlayerSummary;
use serde_json::{Map, Value};

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /matches/:match_id/
///
/// Full `match_details` row, or a bare 404.
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> ApiResult<Json<Map<String, Value>>> {
    db::matches::get_match(&state.db, &match_id)
        .await
        .map_err(ApiError::storage("fetch match"))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("match {}", match_id)))
}

/// GET /matches/:match_id/players
///
/// Players with a score row for the match; empty list when none.
pub async fn get_match_players(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> ApiResult<Json<Vec<PlayerSummary>>> {
    let players = db::matches::match_players(&state.db, &match_id)
        .await
        .map_err(ApiError::storage("list match players"))?;
    Ok(Json(players))
}
