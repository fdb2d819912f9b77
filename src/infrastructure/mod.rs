// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, FFmpeg and the audio device.
//!
//! # Available Adapters
//!
//! - [`http_script`]: Embed script download (implements [`ScriptHost`])
//! - [`playback_surface`]: In-window media element (implements [`MediaElement`]
//!   and [`MediaProbe`]), backed by [`decoder`] and [`audio_output`]
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Failures are returned as domain errors, never panics
//!
//! [`ScriptHost`]: crate::application::port::ScriptHost
//! [`MediaProbe`]: crate::application::port::MediaProbe
//! [`MediaElement`]: crate::application::port::MediaElement

pub mod audio_output;
pub mod decoder;
pub mod http_script;
pub mod playback_surface;

// Re-export main types for convenience
pub use http_script::HttpScriptHost;
pub use playback_surface::PlaybackSurface;
