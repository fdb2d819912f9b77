// SPDX-License-Identifier: MPL-2.0
//! Embed widget domain types.
//!
//! The shared load state of the third-party script, the identifiers of its
//! attempts, and the tagged view each purchase placement renders from.

pub mod state;
pub mod widget;

pub use state::{AttemptId, EmbedState};
pub use widget::{EmbedWidget, Placement, PlacementView, WIDGET_TAG};
