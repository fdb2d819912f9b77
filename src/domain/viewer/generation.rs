// SPDX-License-Identifier: MPL-2.0
//! Monotonic generation counter for discarding stale asynchronous events.
//!
//! Every selection gets a fresh [`Generation`]. Asynchronous completions
//! (media ready, media failed, settle timer) capture the generation that was
//! live when they were started and are only applied if it still is.

use std::fmt;

/// Tag identifying one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Source of strictly increasing generations.
///
/// The first generation handed out is `1`; a counter never reuses a value,
/// even across close/reopen cycles.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    last: u64,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next generation.
    pub fn next_generation(&mut self) -> Generation {
        self.last = self.last.saturating_add(1);
        Generation(self.last)
    }

    /// Returns the most recently allocated generation.
    #[must_use]
    pub fn last(&self) -> Option<Generation> {
        (self.last > 0).then_some(Generation(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_generation_is_one() {
        let mut counter = GenerationCounter::new();
        assert!(counter.last().is_none());
        assert_eq!(counter.next_generation().value(), 1);
    }

    #[test]
    fn generations_strictly_increase() {
        let mut counter = GenerationCounter::new();
        let mut previous = counter.next_generation();
        for _ in 0..50 {
            let next = counter.next_generation();
            assert!(next > previous);
            previous = next;
        }
        assert_eq!(counter.last(), Some(previous));
    }

    #[test]
    fn display_is_tagged() {
        let mut counter = GenerationCounter::new();
        assert_eq!(counter.next_generation().to_string(), "gen#1");
    }
}
