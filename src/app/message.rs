// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::embed;
use crate::ui::notifications;
use crate::ui::viewer;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Embed(embed::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for spinners and toast auto-dismiss.
    Tick(Instant),
    /// Frame pacing tick while a video is playing.
    FrameTick(Instant),
    /// The main window reported its id (first event seen from it).
    WindowSeen(window::Id),
    /// The window was resized; its mode may have changed underneath us.
    WindowResized(window::Id),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWREEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional media directory override.
    pub media_dir: Option<String>,
}
