// SPDX-License-Identifier: MPL-2.0
//! Player state machine.

/// Lifecycle of the modal player.
///
/// `Closed` is both the initial state and the state every close reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// No modal is shown.
    #[default]
    Closed,
    /// A selection was made; waiting for the media to be playable.
    Opening,
    /// Media can play.
    Ready,
    /// Media failed to load.
    PlaybackError,
}

impl PlayerState {
    /// Returns true while the modal is on screen.
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns true while a transition is pending.
    #[must_use]
    pub fn is_opening(self) -> bool {
        matches!(self, Self::Opening)
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::PlaybackError)
    }

    /// Returns true if an explicit close is a regular transition from here.
    #[must_use]
    pub fn can_close(self) -> bool {
        matches!(self, Self::Ready | Self::PlaybackError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed() {
        assert_eq!(PlayerState::default(), PlayerState::Closed);
        assert!(!PlayerState::default().is_open());
    }

    #[test]
    fn state_checks() {
        assert!(PlayerState::Opening.is_open());
        assert!(PlayerState::Opening.is_opening());
        assert!(PlayerState::Ready.is_ready());
        assert!(PlayerState::PlaybackError.is_error());
        assert!(!PlayerState::Ready.is_opening());
    }

    #[test]
    fn close_is_regular_from_settled_states() {
        assert!(PlayerState::Ready.can_close());
        assert!(PlayerState::PlaybackError.can_close());
        assert!(!PlayerState::Opening.can_close());
        assert!(!PlayerState::Closed.can_close());
    }
}
