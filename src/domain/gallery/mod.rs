// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

pub mod catalog;

pub use catalog::{Catalog, Direction, GalleryItem};
