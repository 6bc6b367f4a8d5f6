//! cricket-stats library
//!
//! HTTP access to a pre-existing SQLite store of cricket players, matches
//! and per-match scores.

use axum::routing::{get, MethodRouter};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Single shared connection to the store
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Every data route answers with and without a trailing slash.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new();
    let routes = with_trailing_slash(routes, "/players", get(api::list_players));
    let routes = with_trailing_slash(
        routes,
        "/players/:player_id",
        get(api::get_player).put(api::update_player),
    );
    let routes = with_trailing_slash(
        routes,
        "/players/:player_id/matches",
        get(api::get_player_matches),
    );
    let routes = with_trailing_slash(
        routes,
        "/players/:player_id/playerScores",
        get(api::get_player_scores),
    );
    let routes = with_trailing_slash(routes, "/matches/:match_id", get(api::get_match));
    let routes = with_trailing_slash(
        routes,
        "/matches/:match_id/players",
        get(api::get_match_players),
    );

    Router::new()
        .merge(routes)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Register `path` and `path/` for the same handlers
fn with_trailing_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{}/", path), method_router)
}
