//! Roster fixtures.

use chrono::NaiveDate;
use guildhall_core::character::CharacterDraft;
use guildhall_core::guild::Guild;
use guildhall_core::race::Race;
use guildhall_core::timestamp::Timestamp;

/// A guild founded at midnight on 2024-01-01 (naive timestamp) in Eriador.
///
/// # Panics
///
/// Never in practice; the fixed date is valid.
#[must_use]
pub fn guild(id: i64, name: &str) -> Guild {
    let created = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("fixture date is valid");
    Guild {
        id,
        name: name.to_owned(),
        realm: "Eriador".to_owned(),
        created: Timestamp::Naive(created),
    }
}

/// The guild used throughout the examples: id 1, "Fellowship".
#[must_use]
pub fn fellowship_guild() -> Guild {
    guild(1, "Fellowship")
}

/// A level 5 human with 50 hp and no damage set.
#[must_use]
pub fn character_draft(name: &str, guild_id: i64) -> CharacterDraft {
    CharacterDraft {
        name: name.to_owned(),
        level: 5,
        race: Race::Human,
        hp: 50,
        damage: None,
        guild_id,
    }
}
