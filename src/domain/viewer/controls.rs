// SPDX-License-Identifier: MPL-2.0
//! Playback control flags.

/// Mute and fullscreen flags of the modal player.
///
/// These are independent of [`PlayerState`](super::PlayerState): they survive
/// navigation inside one modal session and are reset when the modal closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackControls {
    /// Whether audio is muted.
    pub muted: bool,
    /// Whether the modal viewport is fullscreen, as reported by the environment.
    pub fullscreen: bool,
}

/// How mute is restored when a modal session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutePolicy {
    /// Mute state of a fresh session.
    pub start_muted: bool,
    /// Carry the last explicit mute choice into the next session.
    pub remember_choice: bool,
}

impl PlaybackControls {
    /// Controls of a fresh session under `policy`.
    #[must_use]
    pub fn initial(policy: MutePolicy) -> Self {
        Self {
            muted: policy.start_muted,
            fullscreen: false,
        }
    }

    /// Controls after a session ends. Fullscreen never carries over.
    #[must_use]
    pub fn reset(self, policy: MutePolicy) -> Self {
        let muted = if policy.remember_choice {
            self.muted
        } else {
            policy.start_muted
        };
        Self {
            muted,
            fullscreen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unmuted_windowed() {
        let controls = PlaybackControls::default();
        assert!(!controls.muted);
        assert!(!controls.fullscreen);
    }

    #[test]
    fn reset_clears_fullscreen_and_restores_start_mute() {
        let policy = MutePolicy::default();
        let controls = PlaybackControls {
            muted: true,
            fullscreen: true,
        };
        assert_eq!(controls.reset(policy), PlaybackControls::default());
    }

    #[test]
    fn reset_keeps_last_choice_when_remembered() {
        let policy = MutePolicy {
            start_muted: false,
            remember_choice: true,
        };
        let controls = PlaybackControls {
            muted: true,
            fullscreen: true,
        };
        let reset = controls.reset(policy);
        assert!(reset.muted);
        assert!(!reset.fullscreen);
    }

    #[test]
    fn initial_honors_start_muted() {
        let policy = MutePolicy {
            start_muted: true,
            remember_choice: false,
        };
        assert!(PlaybackControls::initial(policy).muted);
    }
}
