// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the media viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── loading     - Spinner shown while the selection is Opening
//!     └── fullscreen  - One outstanding fullscreen transition at a time
//! ```

pub mod fullscreen;
pub mod loading;
