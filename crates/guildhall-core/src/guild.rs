//! The guild record.

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// A guild. The id is supplied by the caller and is not checked for
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Caller-supplied identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Realm the guild belongs to.
    pub realm: String,
    /// When the guild was founded.
    pub created: Timestamp,
}
