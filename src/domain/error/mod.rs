// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns. None of them is ever
//! thrown past the UI: each is turned into explicit state where it occurs.

mod embed;
mod fullscreen;
mod media;

pub use embed::EmbedLoadError;
pub use fullscreen::FullscreenDenied;
pub use media::MediaLoadError;
