// SPDX-License-Identifier: MPL-2.0
//! Media viewer: gallery selection and the modal video player.
//!
//! [`component`] owns the state machine, [`view`] renders the modal and
//! [`subcomponents`] hold the small self-contained pieces it orchestrates.

pub mod component;
pub mod subcomponents;
pub mod view;

pub use component::{Effect, Message, Settings, State};
pub use view::view;
