// SPDX-License-Identifier: MPL-2.0
//! `showreel` is a storefront video showcase built with the Iced GUI framework.
//!
//! A gallery of clips opens a modal player with navigation, mute and
//! fullscreen controls, and every purchase placement on the page shares one
//! asynchronously loaded buy-button script with timeout and manual retry.
//!
//! # Layers
//!
//! - [`domain`]: pure types (catalog, player state, embed state)
//! - [`application`]: port traits the UI drives
//! - [`infrastructure`]: adapters for files, HTTP and the playback surface
//! - [`ui`]: TEA components and views
//! - [`app`]: the Iced application wiring it all together

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
