//! Request Generations
//!
//! Every issued request takes the next generation number. A result is only
//! applied when its generation is still the latest one issued, so a slow
//! response can never overwrite the answer to a newer request.

use std::cell::Cell;

/// Marker handed out when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter for one piece of view state
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: Cell<u64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding every earlier one
    pub fn issue(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest.get())
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest.get()
    }
}

/// Whether a finished request changed the visible state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let counter = GenerationCounter::new();
        let first = counter.issue();
        let second = counter.issue();
        assert!(first < second);
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert_eq!(counter.latest(), second);
    }

    #[test]
    fn test_generations_start_at_one() {
        let counter = GenerationCounter::new();
        assert_eq!(counter.issue().value(), 1);
    }
}
