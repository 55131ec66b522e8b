//! Random number generator abstraction.
//!
//! In production this wraps the thread-local `rand` generator. In tests a
//! mock or recorded sequence is injected instead.

use rand::Rng;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRng;

impl DeterministicRng for ThreadRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}
