//! Test repositories — mock `RosterRepository` implementations for tests.

use async_trait::async_trait;
use guildhall_core::character::Character;
use guildhall_core::error::DomainError;
use guildhall_core::guild::Guild;
use guildhall_core::repository::{CharacterAppend, RosterRepository};

fn unavailable() -> DomainError {
    DomainError::Infrastructure("roster unavailable".into())
}

/// A roster repository that fails every call with an infrastructure error.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingRosterRepository;

#[async_trait]
impl RosterRepository for FailingRosterRepository {
    async fn append_guild(&self, _guild: Guild) -> Result<Vec<Guild>, DomainError> {
        Err(unavailable())
    }

    async fn find_guild(&self, _guild_id: i64) -> Result<Option<Guild>, DomainError> {
        Err(unavailable())
    }

    async fn append_character(
        &self,
        _character: Character,
    ) -> Result<CharacterAppend, DomainError> {
        Err(unavailable())
    }

    async fn guilds(&self) -> Result<Vec<Guild>, DomainError> {
        Err(unavailable())
    }

    async fn characters(&self) -> Result<Vec<Character>, DomainError> {
        Err(unavailable())
    }
}
