//! Route modules.

use axum::Router;

use crate::state::AppState;

pub mod characters;
pub mod guilds;
pub mod health;
pub mod reports;

/// Merges every route module into one router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(guilds::router())
        .merge(characters::router())
        .merge(reports::router())
}
