//! Command handlers for the roster.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: resolve references, build the entity, append it
//! to the repository.

use std::sync::Mutex;

use guildhall_core::character::{CHARACTER_ID_MAX, CHARACTER_ID_MIN, Character};
use guildhall_core::command::Command;
use guildhall_core::error::DomainError;
use guildhall_core::guild::Guild;
use guildhall_core::repository::{CharacterAppend, RosterRepository};
use guildhall_core::rng::DeterministicRng;
use tracing::{info, warn};

use crate::domain::commands::{CreateCharacter, CreateGuild};

/// Handles the `CreateGuild` command: appends the guild unconditionally and
/// returns the full guild list.
///
/// # Errors
///
/// Returns `DomainError` if the repository append fails.
pub async fn handle_create_guild(
    command: &CreateGuild,
    repo: &dyn RosterRepository,
) -> Result<Vec<Guild>, DomainError> {
    let guilds = repo.append_guild(command.guild.clone()).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        guild_id = command.guild.id,
        guild_count = guilds.len(),
        "guild registered"
    );

    Ok(guilds)
}

/// Handles the `CreateCharacter` command: resolves the referenced guild,
/// draws a random id, embeds a snapshot of the guild and appends the
/// character.
///
/// Ids are drawn uniformly from `[CHARACTER_ID_MIN, CHARACTER_ID_MAX]` with
/// no collision avoidance; a collision is logged and the character is still
/// stored.
///
/// # Errors
///
/// Returns `DomainError::GuildNotFound` if no guild has `guild_id`; nothing
/// is appended in that case. Returns `DomainError::Infrastructure` if the RNG
/// mutex is poisoned or the repository fails.
pub async fn handle_create_character(
    command: &CreateCharacter,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn RosterRepository,
) -> Result<Vec<Character>, DomainError> {
    let guild_id = command.draft.guild_id;
    let Some(guild) = repo.find_guild(guild_id).await? else {
        info!(
            correlation_id = %command.correlation_id(),
            guild_id,
            "character references unknown guild"
        );
        return Err(DomainError::GuildNotFound(guild_id));
    };

    // Lock RNG only for the draw — never across an await.
    let character_id = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        rng_guard.next_u32_range(CHARACTER_ID_MIN, CHARACTER_ID_MAX)
    };

    let character = Character::from_draft(character_id, command.draft.clone(), &guild);
    let CharacterAppend {
        characters,
        id_collision,
    } = repo.append_character(character).await?;

    if id_collision {
        warn!(character_id, "generated character id is already in use");
    }

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        character_id,
        guild_id,
        character_count = characters.len(),
        "character created"
    );

    Ok(characters)
}
