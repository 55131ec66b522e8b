//! Routes for guild registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use guildhall_core::guild::Guild;
use tracing::{info, instrument};
use uuid::Uuid;

use guildhall_roster::application::command_handlers;
use guildhall_roster::domain::commands;

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /guilds
#[instrument(skip(state, guild), fields(guild_id = guild.id))]
async fn create_guild(
    State(state): State<AppState>,
    ValidatedJson(guild): ValidatedJson<Guild>,
) -> Result<(StatusCode, Json<Vec<Guild>>), ApiError> {
    let command = commands::CreateGuild {
        correlation_id: Uuid::new_v4(),
        guild,
    };

    info!(correlation_id = %command.correlation_id, "handling create_guild command");

    let guilds = command_handlers::handle_create_guild(&command, &*state.roster).await?;

    Ok((StatusCode::CREATED, Json(guilds)))
}

/// Returns the router for guild registration.
pub fn router() -> Router<AppState> {
    Router::new().route("/guilds", post(create_guild))
}
