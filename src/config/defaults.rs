// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Storefront catalog and media directory
//! - **Viewer**: Settle delay after navigation, mute behavior
//! - **Embed**: Buy-button script location and load budget

use std::time::Duration;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Directory local media sources are resolved against, relative to the
/// working directory.
pub const DEFAULT_MEDIA_DIR: &str = "public";

/// Storefront catalog shipped when no `[gallery]` items are configured.
pub const DEFAULT_GALLERY_SOURCES: [&str; 8] = [
    "/video/video1.mp4",
    "/video/video2.mp4",
    "/video/video3.mp4",
    "/video/video4.mp4",
    "/video/video5.mov",
    "/video/video6.mov",
    "/video/video7.mp4",
    "/video/video8.mp4",
];

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Delay between a navigation and the load request for the new item.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// Upper bound for the settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 2_000;

/// Whether a fresh modal session starts muted.
pub const DEFAULT_START_MUTED: bool = false;

/// Whether the last mute choice carries into the next session.
pub const DEFAULT_REMEMBER_MUTE: bool = false;

// ==========================================================================
// Embed Defaults
// ==========================================================================

/// Buy-button script location.
pub const DEFAULT_EMBED_SCRIPT_URL: &str = "https://js.stripe.com/v3/buy-button.js";

/// Load budget for one embed attempt (in seconds).
pub const DEFAULT_EMBED_TIMEOUT_SECS: u64 = 10;

/// Minimum embed load budget (in seconds).
pub const MIN_EMBED_TIMEOUT_SECS: u64 = 1;

/// Maximum embed load budget (in seconds).
pub const MAX_EMBED_TIMEOUT_SECS: u64 = 120;

/// Contact shown next to a failed buy button.
pub const DEFAULT_FALLBACK_CONTACT: &str = "sales@example.com";

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    assert!(MIN_EMBED_TIMEOUT_SECS > 0);
    assert!(MIN_EMBED_TIMEOUT_SECS <= DEFAULT_EMBED_TIMEOUT_SECS);
    assert!(DEFAULT_EMBED_TIMEOUT_SECS <= MAX_EMBED_TIMEOUT_SECS);
    assert!(!DEFAULT_GALLERY_SOURCES.is_empty());
};

/// Clamps a configured embed timeout to the accepted range.
#[must_use]
pub fn clamp_embed_timeout_secs(secs: u64) -> u64 {
    secs.clamp(MIN_EMBED_TIMEOUT_SECS, MAX_EMBED_TIMEOUT_SECS)
}

/// Clamps a configured settle delay to the accepted range.
#[must_use]
pub fn clamp_settle_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.min(MAX_SETTLE_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_timeout_is_clamped() {
        assert_eq!(clamp_embed_timeout_secs(0), MIN_EMBED_TIMEOUT_SECS);
        assert_eq!(clamp_embed_timeout_secs(10), 10);
        assert_eq!(clamp_embed_timeout_secs(600), MAX_EMBED_TIMEOUT_SECS);
    }

    #[test]
    fn settle_delay_is_capped() {
        assert_eq!(clamp_settle_delay(150), Duration::from_millis(150));
        assert_eq!(
            clamp_settle_delay(60_000),
            Duration::from_millis(MAX_SETTLE_DELAY_MS)
        );
    }

    #[test]
    fn default_catalog_has_two_mov_entries() {
        let movs = DEFAULT_GALLERY_SOURCES
            .iter()
            .filter(|s| s.ends_with(".mov"))
            .count();
        assert_eq!(movs, 2);
    }
}
