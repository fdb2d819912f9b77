// SPDX-License-Identifier: MPL-2.0
//! The item currently requested for playback.

use super::generation::Generation;
use crate::domain::gallery::GalleryItem;

/// A gallery item tagged with the generation it was selected under.
///
/// A selection is replaced, never mutated, whenever a new one is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    item: GalleryItem,
    generation: Generation,
}

impl Selection {
    #[must_use]
    pub fn new(item: GalleryItem, generation: Generation) -> Self {
        Self { item, generation }
    }

    #[must_use]
    pub fn item(&self) -> &GalleryItem {
        &self.item
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns true if an event tagged with `generation` belongs to this selection.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}
