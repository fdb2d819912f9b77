// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Domain failures ([`MediaLoadError`], [`EmbedLoadError`],
//! [`FullscreenDenied`]) become explicit UI state where they happen. This
//! type is what crosses module boundaries: configuration IO, startup, and
//! the occasional domain error that has to be reported as a whole.

use crate::domain::error::{EmbedLoadError, FullscreenDenied, MediaLoadError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaLoadError),
    Embed(EmbedLoadError),
    Fullscreen(FullscreenDenied),
}

impl Error {
    /// Returns the i18n key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Media(e) => e.i18n_key(),
            Error::Embed(e) => e.i18n_key(),
            Error::Fullscreen(_) => "error-fullscreen-denied",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
            Error::Embed(e) => write!(f, "Embed Error: {}", e),
            Error::Fullscreen(e) => write!(f, "Fullscreen Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaLoadError> for Error {
    fn from(err: MediaLoadError) -> Self {
        Error::Media(err)
    }
}

impl From<EmbedLoadError> for Error {
    fn from(err: EmbedLoadError) -> Self {
        Error::Embed(err)
    }
}

impl From<FullscreenDenied> for Error {
    fn from(err: FullscreenDenied) -> Self {
        Error::Fullscreen(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(message) if message.contains("boom")));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn domain_errors_keep_their_i18n_keys() {
        let media = MediaLoadError::NotFound("a.mp4".into());
        assert_eq!(Error::from(media.clone()).i18n_key(), media.i18n_key());

        let embed = EmbedLoadError::TimedOut(Duration::from_secs(10));
        assert_eq!(Error::from(embed.clone()).i18n_key(), embed.i18n_key());

        let denied = Error::from(FullscreenDenied { requested: true });
        assert_eq!(denied.i18n_key(), "error-fullscreen-denied");
    }

    #[test]
    fn display_wraps_domain_messages() {
        let err = Error::from(EmbedLoadError::Status(503));
        assert!(format!("{}", err).starts_with("Embed Error: "));
    }
}
