//! Shared application state.

use std::sync::{Arc, Mutex};

use guildhall_core::repository::RosterRepository;
use guildhall_core::rng::{DeterministicRng, ThreadRng};
use guildhall_store::InMemoryRosterRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Random source for character ids.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Guild and character storage.
    pub roster: Arc<dyn RosterRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        roster: Arc<dyn RosterRepository>,
    ) -> Self {
        Self { rng, roster }
    }

    /// State backed by an empty in-memory roster and the thread RNG.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(Mutex::new(ThreadRng)),
            Arc::new(InMemoryRosterRepository::new()),
        )
    }
}
