// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: Media element commands and readiness probing
//! - [`script`]: Embed script injection and removal
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` where appropriate for thread-safe usage
//! - Asynchronous methods return `BoxFuture`; callers wrap them in Iced's `Task`

pub mod media;
pub mod script;

// Re-export main types for convenience
pub use media::{MediaElement, MediaProbe};
pub use script::ScriptHost;
