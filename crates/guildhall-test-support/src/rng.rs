//! Character id sources with known output.

use guildhall_core::rng::DeterministicRng;

/// Always yields the lower bound, so every character gets id `0`.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Yields the given ids in order, ignoring the requested bounds.
///
/// Lets a test pin the id of each character it creates, including
/// deliberate duplicates. Panics once the list runs out, which flags a test
/// that creates more characters than it planned for.
#[derive(Debug)]
pub struct SequenceRng {
    ids: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    /// Ids are handed out front to back.
    #[must_use]
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids, next: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let id = self.ids[self.next];
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_rng_yields_lower_bound() {
        assert_eq!(MockRng.next_u32_range(0, 9_999), 0);
    }

    #[test]
    fn test_sequence_rng_replays_ids_in_order() {
        let mut rng = SequenceRng::new(vec![42, 42, 7]);
        let drawn: Vec<u32> = (0..3).map(|_| rng.next_u32_range(0, 9_999)).collect();
        assert_eq!(drawn, [42, 42, 7]);
    }
}
