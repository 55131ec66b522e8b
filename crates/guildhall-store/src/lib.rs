//! Guildhall store — process-lifetime storage for the roster.

pub mod in_memory_roster_repository;

pub use in_memory_roster_repository::InMemoryRosterRepository;
