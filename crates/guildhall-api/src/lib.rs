//! Guildhall HTTP API: routes, shared state and error mapping.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the complete application router with request tracing.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
