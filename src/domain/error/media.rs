// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Reasons a media resource could not be made playable.
/// Surfaced as the `PlaybackError` player state, never as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLoadError {
    /// The resource does not exist.
    NotFound(String),

    /// The resource exists but is not a container the player understands.
    UnsupportedFormat(String),

    /// Local read failed (permissions, truncated file, ...).
    Io(String),

    /// Remote resource could not be reached.
    Network(String),

    /// Remote resource answered with a non-success HTTP status.
    Status(u16),
}

impl MediaLoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaLoadError::NotFound(_) => "error-media-not-found",
            MediaLoadError::UnsupportedFormat(_) => "error-media-unsupported",
            MediaLoadError::Io(_) => "error-media-io",
            MediaLoadError::Network(_) | MediaLoadError::Status(_) => "error-media-network",
        }
    }

    /// Categorizes an I/O error raised while opening a local resource.
    #[must_use]
    pub fn from_io(source: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => MediaLoadError::NotFound(source.to_string()),
            _ => MediaLoadError::Io(format!("{source}: {err}")),
        }
    }
}

impl fmt::Display for MediaLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaLoadError::NotFound(source) => write!(f, "Media not found: {}", source),
            MediaLoadError::UnsupportedFormat(source) => {
                write!(f, "Unsupported media format: {}", source)
            }
            MediaLoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            MediaLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            MediaLoadError::Status(code) => write!(f, "Server answered HTTP {}", code),
        }
    }
}

impl std::error::Error for MediaLoadError {}
