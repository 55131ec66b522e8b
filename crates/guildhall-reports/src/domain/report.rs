//! Rendered report documents.

/// Media type of every report.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// The reports the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// One row per guild.
    Guilds,
    /// One row per character, with its guild's id and name.
    Characters,
}

impl ReportKind {
    /// Download filename offered to the client.
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            Self::Guilds => "guilds.csv",
            Self::Characters => "characters.csv",
        }
    }

    /// Header row, in column order.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Guilds => &["id", "name", "realm", "created"],
            Self::Characters => &[
                "id",
                "name",
                "level",
                "race",
                "hp",
                "damage",
                "guild_id",
                "guild_name",
            ],
        }
    }
}

/// A rendered CSV document ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub body: Vec<u8>,
}

impl Report {
    /// Value for the `Content-Disposition` response header.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.kind.filename())
    }
}
