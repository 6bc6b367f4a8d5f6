//! Player endpoints
//!
//! - GET /players/
//! - GET /players/:player_id/
//! - PUT /players/:player_id/
//! - GET /players/:player_id/matches
//! - GET /players/:player_id/playerScores

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap},
    Json,
};
use cricket_common::db::{MatchSummary, PlayerScoreTotals, PlayerSummary, UpdatePlayerRequest};
use serde_json::{Map, Value};
use tracing::debug;

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Plain-text body of a successful update
pub const PLAYER_UPDATED: &str = "Player Details Updated";

/// GET /players/
pub async fn list_players(State(state): State<AppState>) -> ApiResult<Json<Vec<PlayerSummary>>> {
    let players = db::players::list_players(&state.db)
        .await
        .map_err(ApiError::storage("list players"))?;
    Ok(Json(players))
}

/// GET /players/:player_id/
///
/// Full `player_details` row, or a bare 404.
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<Json<Map<String, Value>>> {
    db::players::get_player(&state.db, &player_id)
        .await
        .map_err(ApiError::storage("fetch player"))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("player {}", player_id)))
}

/// PUT /players/:player_id/
///
/// Body `{"playerName": ...}`. A body without a JSON content type, an empty
/// body or a body without `playerName` stores NULL. Malformed JSON is a 400
/// and leaves the store untouched. Otherwise answers 200 on a successful
/// statement, even when no row matched.
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<&'static str> {
    let request = parse_update_body(&headers, &body)?;
    let player_name = request.player_name.unwrap_or(Value::Null);

    let updated = db::players::update_player_name(&state.db, &player_id, &player_name)
        .await
        .map_err(ApiError::storage("update player name"))?;

    if updated == 0 {
        debug!("Update for player {} matched no rows", player_id);
    }

    Ok(PLAYER_UPDATED)
}

/// GET /players/:player_id/matches
pub async fn get_player_matches(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<Json<Vec<MatchSummary>>> {
    let matches = db::players::player_matches(&state.db, &player_id)
        .await
        .map_err(ApiError::storage("list player matches"))?;
    Ok(Json(matches))
}

/// GET /players/:player_id/playerScores
///
/// 404 when the player has no score rows.
pub async fn get_player_scores(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<Json<PlayerScoreTotals>> {
    db::players::player_score_totals(&state.db, &player_id)
        .await
        .map_err(ApiError::storage("sum player scores"))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("scores for player {}", player_id)))
}

/// Read an update body, treating anything that is not a JSON object with
/// `playerName` as a request without a name
fn parse_update_body(headers: &HeaderMap, body: &[u8]) -> ApiResult<UpdatePlayerRequest> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdatePlayerRequest::default());
    }

    match Json::<UpdatePlayerRequest>::from_bytes(body) {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::JsonSyntaxError(e)) => Err(ApiError::BadRequest(e.body_text())),
        Err(e) => {
            debug!("Ignoring update body: {}", e.body_text());
            Ok(UpdatePlayerRequest::default())
        }
    }
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
