// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`embed`]: Embed script state ([`EmbedState`](embed::EmbedState),
//!   [`PlacementView`](embed::PlacementView), [`EmbedWidget`](embed::EmbedWidget))
//! - [`error`]: Domain error types ([`MediaLoadError`](error::MediaLoadError),
//!   [`EmbedLoadError`](error::EmbedLoadError), [`FullscreenDenied`](error::FullscreenDenied))
//! - [`gallery`]: Catalog types ([`Catalog`](gallery::Catalog), [`GalleryItem`](gallery::GalleryItem))
//! - [`viewer`]: Modal player types ([`PlayerState`](viewer::PlayerState),
//!   [`Selection`](viewer::Selection), [`Generation`](viewer::Generation))

pub mod embed;
pub mod error;
pub mod gallery;
pub mod viewer;
