// SPDX-License-Identifier: MPL-2.0
//! Media viewer domain types.
//!
//! Value objects for the modal player: selection, generation tagging,
//! player lifecycle and control flags. No presentation concerns here.

pub mod controls;
pub mod generation;
pub mod player_state;
pub mod selection;

pub use controls::{MutePolicy, PlaybackControls};
pub use generation::{Generation, GenerationCounter};
pub use player_state::PlayerState;
pub use selection::Selection;
