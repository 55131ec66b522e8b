//! Routes for character creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use guildhall_core::character::{Character, CharacterDraft};
use tracing::{info, instrument};
use uuid::Uuid;

use guildhall_roster::application::command_handlers;
use guildhall_roster::domain::commands;

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /characters
#[instrument(skip(state, draft), fields(guild_id = draft.guild_id))]
async fn create_character(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<CharacterDraft>,
) -> Result<(StatusCode, Json<Vec<Character>>), ApiError> {
    let command = commands::CreateCharacter {
        correlation_id: Uuid::new_v4(),
        draft,
    };

    info!(correlation_id = %command.correlation_id, "handling create_character command");

    let characters =
        command_handlers::handle_create_character(&command, &state.rng, &*state.roster).await?;

    Ok((StatusCode::CREATED, Json(characters)))
}

/// Returns the router for character creation.
pub fn router() -> Router<AppState> {
    Router::new().route("/characters", post(create_character))
}
