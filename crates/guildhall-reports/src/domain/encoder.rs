//! CSV encoding of guild and character collections.
//!
//! Output uses the same dialect for every report: every field is
//! double-quoted (embedded quotes doubled), records end with CRLF, and the
//! header row is written even when there are no rows.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use guildhall_core::character::Character;
use guildhall_core::error::DomainError;
use guildhall_core::guild::Guild;
use guildhall_core::race::Race;
use guildhall_core::timestamp::Timestamp;
use serde::Serialize;

use crate::domain::report::ReportKind;

#[derive(Serialize)]
struct GuildRow<'a> {
    id: i64,
    name: &'a str,
    realm: &'a str,
    created: Timestamp,
}

impl<'a> From<&'a Guild> for GuildRow<'a> {
    fn from(guild: &'a Guild) -> Self {
        Self {
            id: guild.id,
            name: &guild.name,
            realm: &guild.realm,
            created: guild.created,
        }
    }
}

#[derive(Serialize)]
struct CharacterRow<'a> {
    id: u32,
    name: &'a str,
    level: i64,
    race: Race,
    hp: i64,
    damage: Option<i64>,
    guild_id: i64,
    guild_name: &'a str,
}

impl<'a> From<&'a Character> for CharacterRow<'a> {
    fn from(character: &'a Character) -> Self {
        Self {
            id: character.id,
            name: &character.name,
            level: character.level,
            race: character.race,
            hp: character.hp,
            damage: character.damage,
            guild_id: character.guild.id,
            guild_name: &character.guild.name,
        }
    }
}

fn csv_error(err: impl std::fmt::Display) -> DomainError {
    DomainError::Infrastructure(format!("CSV encoding failed: {err}"))
}

fn encode<'a, T, R>(kind: ReportKind, items: &'a [T]) -> Result<Vec<u8>, DomainError>
where
    R: Serialize + From<&'a T>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(kind.columns()).map_err(csv_error)?;
    for item in items {
        writer.serialize(R::from(item)).map_err(csv_error)?;
    }

    writer.into_inner().map_err(csv_error)
}

/// Encodes guilds as `id,name,realm,created`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the CSV writer fails.
pub fn encode_guilds(guilds: &[Guild]) -> Result<Vec<u8>, DomainError> {
    encode::<Guild, GuildRow<'_>>(ReportKind::Guilds, guilds)
}

/// Encodes characters as `id,name,level,race,hp,damage,guild_id,guild_name`.
/// An unset damage value becomes an empty quoted field.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the CSV writer fails.
pub fn encode_characters(characters: &[Character]) -> Result<Vec<u8>, DomainError> {
    encode::<Character, CharacterRow<'_>>(ReportKind::Characters, characters)
}
