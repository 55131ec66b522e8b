//! Roster repository abstraction.

use async_trait::async_trait;

use crate::character::Character;
use crate::error::DomainError;
use crate::guild::Guild;

/// Result of appending a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterAppend {
    /// Every character in insertion order, including the new one.
    pub characters: Vec<Character>,
    /// Whether another character already had the new character's id when it
    /// was appended. Checked under the same lock as the append.
    pub id_collision: bool,
}

/// Append-only storage for guilds and characters.
///
/// Implementations must guard both collections so that a snapshot never
/// observes a partially appended entity. Entities are never removed, so a
/// guild found by `find_guild` stays valid for the rest of the process.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Append a guild and return every guild in insertion order.
    async fn append_guild(&self, guild: Guild) -> Result<Vec<Guild>, DomainError>;

    /// Return the first guild whose id equals `guild_id`.
    async fn find_guild(&self, guild_id: i64) -> Result<Option<Guild>, DomainError>;

    /// Append a character, reporting whether its id was already in use.
    async fn append_character(&self, character: Character)
    -> Result<CharacterAppend, DomainError>;

    /// Snapshot of all guilds in insertion order.
    async fn guilds(&self) -> Result<Vec<Guild>, DomainError>;

    /// Snapshot of all characters in insertion order.
    async fn characters(&self) -> Result<Vec<Character>, DomainError>;
}
