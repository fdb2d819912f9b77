// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::time::Duration;

/// Reasons the embed script did not load.
/// Surfaced through `EmbedState::Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedLoadError {
    /// The request never produced a response.
    Network(String),

    /// The script host answered with a non-success status.
    Status(u16),

    /// No outcome within the load budget.
    TimedOut(Duration),
}

impl EmbedLoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EmbedLoadError::Network(_) | EmbedLoadError::Status(_) => "embed-error-network",
            EmbedLoadError::TimedOut(_) => "embed-error-timeout",
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, EmbedLoadError::TimedOut(_))
    }
}

impl fmt::Display for EmbedLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedLoadError::Network(msg) => write!(f, "Embed script request failed: {}", msg),
            EmbedLoadError::Status(code) => write!(f, "Embed script host answered HTTP {}", code),
            EmbedLoadError::TimedOut(budget) => {
                write!(f, "Embed script did not load within {}s", budget.as_secs())
            }
        }
    }
}

impl std::error::Error for EmbedLoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_uses_whole_seconds() {
        let err = EmbedLoadError::TimedOut(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Embed script did not load within 10s");
        assert!(err.is_timeout());
    }

    #[test]
    fn keys_split_timeout_from_network() {
        assert_eq!(EmbedLoadError::Status(500).i18n_key(), "embed-error-network");
        assert_eq!(
            EmbedLoadError::TimedOut(Duration::from_secs(1)).i18n_key(),
            "embed-error-timeout"
        );
    }
}
