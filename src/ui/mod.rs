// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, consumes a `Message` and returns an `Effect` the
//! application turns into tasks.
//!
//! # Components
//!
//! - [`viewer`] - Modal video player opened from the gallery
//! - [`embed`] - Shared buy-button loader and its placements
//! - [`gallery`] - Tile grid selecting catalog items
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod embed;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod viewer;
pub mod widgets;
