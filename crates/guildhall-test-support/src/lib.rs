//! Shared test mocks, fixtures and utilities for the Guildhall service.

mod fixtures;
mod repository;
mod rng;

pub use fixtures::{character_draft, fellowship_guild, guild};
pub use repository::FailingRosterRepository;
pub use rng::{MockRng, SequenceRng};
