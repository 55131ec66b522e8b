//! Commands for the roster.

use guildhall_core::character::CharacterDraft;
use guildhall_core::command::Command;
use guildhall_core::guild::Guild;
use uuid::Uuid;

/// Command to register a guild.
#[derive(Debug, Clone)]
pub struct CreateGuild {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The guild to register, exactly as supplied by the caller.
    pub guild: Guild,
}

/// Command to create a character inside an existing guild.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The character fields plus the id of the guild to join.
    pub draft: CharacterDraft,
}

impl Command for CreateGuild {
    fn command_type(&self) -> &'static str {
        "roster.create_guild"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for CreateCharacter {
    fn command_type(&self) -> &'static str {
        "roster.create_character"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
