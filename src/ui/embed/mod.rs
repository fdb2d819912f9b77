// SPDX-License-Identifier: MPL-2.0
//! Shared loader for the embeddable buy button and the placements that
//! render it.

pub mod component;
pub mod view;

pub use component::{Effect, Message, Settings, State};
pub use view::view;
