//! The closed set of character races.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A character's race. Only these four values exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Race {
    /// `ORC`
    Orc,
    /// `ELF`
    Elf,
    /// `HUMAN`
    Human,
    /// `GOBLIN`
    Goblin,
}

impl Race {
    /// All races in declaration order.
    pub const ALL: [Self; 4] = [Self::Orc, Self::Elf, Self::Human, Self::Goblin];

    /// Returns the wire text for this race.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orc => "ORC",
            Self::Elf => "ELF",
            Self::Human => "HUMAN",
            Self::Goblin => "GOBLIN",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown race `{s}`")))
    }
}
