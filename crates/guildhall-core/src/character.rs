//! The character record and its creation request.

use serde::{Deserialize, Serialize};

use crate::guild::Guild;
use crate::race::Race;

/// Lower bound (inclusive) of generated character ids.
pub const CHARACTER_ID_MIN: u32 = 0;
/// Upper bound (inclusive) of generated character ids.
pub const CHARACTER_ID_MAX: u32 = 9_999;

/// A character. `guild` is an owned snapshot of the guild taken when the
/// character was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Server-generated identifier in `[CHARACTER_ID_MIN, CHARACTER_ID_MAX]`.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Experience level.
    pub level: i64,
    /// One of the four playable races.
    pub race: Race,
    /// Hit points.
    pub hp: i64,
    /// `None` when the creator did not set a damage value.
    pub damage: Option<i64>,
    /// Copy of the guild as it was when the character was created.
    pub guild: Guild,
}

/// Request body for creating a character. Refers to its guild by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterDraft {
    /// Display name.
    pub name: String,
    /// Experience level.
    pub level: i64,
    /// Must be one of the `Race` wire values.
    pub race: Race,
    /// Hit points.
    pub hp: i64,
    /// Optional; absent and `null` both mean "not set".
    #[serde(default)]
    pub damage: Option<i64>,
    /// Id of an existing guild to join.
    pub guild_id: i64,
}

impl Character {
    /// Builds a character from a draft, embedding a copy of `guild`.
    #[must_use]
    pub fn from_draft(id: u32, draft: CharacterDraft, guild: &Guild) -> Self {
        Self {
            id,
            name: draft.name,
            level: draft.level,
            race: draft.race,
            hp: draft.hp,
            damage: draft.damage,
            guild: guild.clone(),
        }
    }
}
