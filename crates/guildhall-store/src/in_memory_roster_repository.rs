//! In-memory implementation of the `RosterRepository` trait.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use guildhall_core::character::Character;
use guildhall_core::error::DomainError;
use guildhall_core::guild::Guild;
use guildhall_core::repository::{CharacterAppend, RosterRepository};

#[derive(Debug, Default)]
struct Roster {
    guilds: Vec<Guild>,
    characters: Vec<Character>,
}

/// Mutex-guarded roster that lives for the lifetime of the process.
///
/// A single lock covers both collections; it is taken for each call and
/// released before the call returns.
#[derive(Debug, Default)]
pub struct InMemoryRosterRepository {
    roster: Mutex<Roster>,
}

impl InMemoryRosterRepository {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, DomainError> {
        self.roster
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("roster mutex poisoned: {e}")))
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn append_guild(&self, guild: Guild) -> Result<Vec<Guild>, DomainError> {
        let mut roster = self.lock()?;
        roster.guilds.push(guild);
        debug!(guild_count = roster.guilds.len(), "guild appended");
        Ok(roster.guilds.clone())
    }

    async fn find_guild(&self, guild_id: i64) -> Result<Option<Guild>, DomainError> {
        let roster = self.lock()?;
        Ok(roster.guilds.iter().find(|g| g.id == guild_id).cloned())
    }

    async fn append_character(
        &self,
        character: Character,
    ) -> Result<CharacterAppend, DomainError> {
        let mut roster = self.lock()?;
        let id_collision = roster.characters.iter().any(|c| c.id == character.id);
        roster.characters.push(character);
        debug!(
            character_count = roster.characters.len(),
            id_collision, "character appended"
        );
        Ok(CharacterAppend {
            characters: roster.characters.clone(),
            id_collision,
        })
    }

    async fn guilds(&self) -> Result<Vec<Guild>, DomainError> {
        Ok(self.lock()?.guilds.clone())
    }

    async fn characters(&self) -> Result<Vec<Character>, DomainError> {
        Ok(self.lock()?.characters.clone())
    }
}
