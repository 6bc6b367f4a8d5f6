//! HTTP API handlers for cricket-stats

pub mod health;
pub mod matches;
pub mod players;

pub use health::health_routes;
pub use matches::{get_match, get_match_players};
pub use players::{
    get_player, get_player_matches, get_player_scores, list_players, update_player,
    PLAYER_UPDATED,
};
