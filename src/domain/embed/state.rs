// SPDX-License-Identifier: MPL-2.0
//! Embed script load state.

use crate::domain::error::EmbedLoadError;
use std::fmt;

/// Identifier of one load attempt.
///
/// Attempts are numbered from 1 and never reused, so a completion or a
/// timeout belonging to an earlier attempt can always be told apart from
/// the one in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Identifier that precedes every real attempt.
    #[must_use]
    pub(crate) fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempt#{}", self.0)
    }
}

/// Process-wide state of the shared embed script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmbedState {
    /// Nothing dispatched yet, or reset by a retry.
    #[default]
    Idle,
    /// One attempt is in flight.
    Loading { attempt: AttemptId },
    /// The script is available; terminal until teardown.
    Loaded,
    /// The last attempt failed or timed out.
    Failed { error: EmbedLoadError },
}

impl EmbedState {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the attempt in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<AttemptId> {
        match self {
            Self::Loading { attempt } => Some(*attempt),
            _ => None,
        }
    }

    /// Returns true if `ensure_loaded` must dispatch from this state.
    #[must_use]
    pub fn needs_dispatch(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_is_idle() {
        assert_eq!(EmbedState::default(), EmbedState::Idle);
    }

    #[test]
    fn dispatch_needed_only_from_idle_or_failed() {
        let attempt = AttemptId::zero().next();
        assert!(EmbedState::Idle.needs_dispatch());
        assert!(EmbedState::Failed {
            error: EmbedLoadError::TimedOut(Duration::from_secs(1))
        }
        .needs_dispatch());
        assert!(!EmbedState::Loading { attempt }.needs_dispatch());
        assert!(!EmbedState::Loaded.needs_dispatch());
    }

    #[test]
    fn in_flight_reports_loading_attempt() {
        let attempt = AttemptId::zero().next().next();
        assert_eq!(EmbedState::Loading { attempt }.in_flight(), Some(attempt));
        assert_eq!(EmbedState::Loaded.in_flight(), None);
        assert_eq!(attempt.value(), 2);
    }
}
