// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the components that care about them. Keyboard
//! input only reaches the viewer while its modal is open; window lifecycle
//! events are always observed.

use super::Message;
use crate::ui::viewer;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick period for spinners and toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Redraw period while a video is playing.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Creates the event subscription. `modal_open` selects whether key presses
/// are forwarded to the viewer.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if modal_open {
        event::listen_with(|event, status, window_id| {
            if let Some(message) = window_message(&event, window_id) {
                return Some(message);
            }
            match (event, status) {
                (
                    event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                    event::Status::Ignored,
                ) => Some(Message::Viewer(viewer::Message::KeyPressed(key))),
                _ => None,
            }
        })
    } else {
        event::listen_with(|event, _status, window_id| window_message(&event, window_id))
    }
}

fn window_message(event: &event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(_)) => Some(Message::WindowResized(window_id)),
        event::Event::Window(window::Event::Opened { .. }) => Some(Message::WindowSeen(window_id)),
        _ => None,
    }
}

/// Creates a periodic tick subscription while something is animating or a
/// toast is waiting to expire.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the redraw tick that shows new video frames while playing.
pub fn create_frame_subscription(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(FRAME_INTERVAL).map(Message::FrameTick)
    } else {
        Subscription::none()
    }
}
