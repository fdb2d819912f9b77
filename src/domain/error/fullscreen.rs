// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// The environment did not honor a fullscreen transition.
///
/// Non-critical: the viewer reverts its flag to what the environment reports
/// and shows nothing to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenDenied {
    /// The state that was asked for.
    pub requested: bool,
}

impl fmt::Display for FullscreenDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requested {
            write!(f, "Fullscreen request was denied")
        } else {
            write!(f, "Fullscreen exit was denied")
        }
    }
}

impl std::error::Error for FullscreenDenied {}
