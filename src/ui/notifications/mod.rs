// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages in the bottom-right corner: configuration warnings,
//! checkout confirmations. Persistent failures are shown where they occur
//! (modal error panel, placement error affordance), not here.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - queueing and auto-dismiss
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
