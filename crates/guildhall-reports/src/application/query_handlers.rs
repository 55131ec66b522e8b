//! Query handlers for reports.
//!
//! Each handler takes a snapshot of the roster and encodes it. The roster
//! is never modified.

use guildhall_core::error::DomainError;
use guildhall_core::repository::RosterRepository;
use tracing::debug;

use crate::domain::encoder;
use crate::domain::report::{Report, ReportKind};

/// Renders every guild as `guilds.csv`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the roster cannot be read or the
/// CSV writer fails.
pub async fn render_guilds_report(repo: &dyn RosterRepository) -> Result<Report, DomainError> {
    let guilds = repo.guilds().await?;
    let body = encoder::encode_guilds(&guilds)?;
    debug!(rows = guilds.len(), bytes = body.len(), "guilds report rendered");
    Ok(Report {
        kind: ReportKind::Guilds,
        body,
    })
}

/// Renders every character as `characters.csv`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the roster cannot be read or the
/// CSV writer fails.
pub async fn render_characters_report(
    repo: &dyn RosterRepository,
) -> Result<Report, DomainError> {
    let characters = repo.characters().await?;
    let body = encoder::encode_characters(&characters)?;
    debug!(
        rows = characters.len(),
        bytes = body.len(),
        "characters report rendered"
    );
    Ok(Report {
        kind: ReportKind::Characters,
        body,
    })
}
