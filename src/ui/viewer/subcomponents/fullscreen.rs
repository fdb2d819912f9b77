// SPDX-License-Identifier: MPL-2.0
//! Fullscreen transition sub-component.
//!
//! A request to the window is asynchronous: the environment answers later
//! with the mode it actually applied. Until that answer arrives further
//! toggles are refused.

use crate::domain::error::FullscreenDenied;

/// Pending fullscreen transition, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pending: Option<bool>,
}

/// Messages for the fullscreen sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Ask for `target` (true = fullscreen).
    Request { target: bool },
    /// The environment answered a request with the mode now in effect.
    Resolved { requested: bool, actual: bool },
}

/// Effects produced by the fullscreen sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the window to switch mode.
    Apply(bool),
    /// The transition finished; `fullscreen` is the actual mode.
    Settled { fullscreen: bool },
    /// The environment refused; `fullscreen` is the mode kept.
    Denied {
        denial: FullscreenDenied,
        fullscreen: bool,
    },
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Request { target } => {
                if self.pending.is_some() {
                    return Effect::None;
                }
                self.pending = Some(target);
                Effect::Apply(target)
            }
            Message::Resolved { requested, actual } => {
                self.pending = None;
                if requested == actual {
                    Effect::Settled { fullscreen: actual }
                } else {
                    Effect::Denied {
                        denial: FullscreenDenied { requested },
                        fullscreen: actual,
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forgets a pending request. Its answer is then treated as a plain
    /// resynchronization.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_request_is_ignored_while_pending() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::Request { target: true }),
            Effect::Apply(true)
        );
        assert_eq!(state.handle(Message::Request { target: false }), Effect::None);
        assert!(state.is_pending());
    }

    #[test]
    fn matching_answer_settles() {
        let mut state = State::default();
        state.handle(Message::Request { target: true });
        assert_eq!(
            state.handle(Message::Resolved {
                requested: true,
                actual: true
            }),
            Effect::Settled { fullscreen: true }
        );
        assert!(!state.is_pending());
    }

    #[test]
    fn mismatching_answer_is_a_denial() {
        let mut state = State::default();
        state.handle(Message::Request { target: true });
        assert_eq!(
            state.handle(Message::Resolved {
                requested: true,
                actual: false
            }),
            Effect::Denied {
                denial: FullscreenDenied { requested: true },
                fullscreen: false
            }
        );
    }
}
