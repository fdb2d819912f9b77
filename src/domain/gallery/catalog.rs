// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog and the items it is made of.
//!
//! The catalog is an ordered, read-only list fixed at startup. An item's
//! ordinal is its position in that list and is the only thing navigation
//! works with.

/// Direction of a navigation step inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step towards the start of the catalog.
    Previous,
    /// Step towards the end of the catalog.
    Next,
}

/// One entry of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    source_ref: String,
    ordinal: usize,
    poster: Option<String>,
}

impl GalleryItem {
    /// Creates an item at the given catalog position.
    #[must_use]
    pub fn new(source_ref: impl Into<String>, ordinal: usize) -> Self {
        Self {
            source_ref: source_ref.into(),
            ordinal,
            poster: None,
        }
    }

    /// Attaches a poster image reference used for the gallery tile.
    #[must_use]
    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }

    /// Returns the media reference (relative path or URL).
    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Returns the position of this item in the catalog.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the poster reference, if any.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref()
    }

    /// One-based, two-digit display number (`ordinal 2` → `"03"`).
    #[must_use]
    pub fn display_number(&self) -> String {
        format!("{:02}", self.ordinal + 1)
    }
}

/// Ordered, immutable list of gallery items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Builds a catalog from `(source, poster)` entries, deriving ordinals
    /// from list position.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<String>)>,
        S: Into<String>,
    {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(ordinal, (source, poster))| GalleryItem::new(source, ordinal).with_poster(poster))
            .collect();
        Self { items }
    }

    /// Builds a catalog from bare sources.
    #[must_use]
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(sources.into_iter().map(|s| (s, None)))
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `ordinal`.
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&GalleryItem> {
        self.items.get(ordinal)
    }

    /// Iterates over items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    /// Returns the ordinal one step away from `ordinal`, wrapping at both
    /// ends. Returns `None` for an empty catalog.
    #[must_use]
    pub fn step(&self, ordinal: usize, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let current = ordinal % len;
        Some(match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        })
    }

    /// Returns the item one step away from `ordinal`.
    #[must_use]
    pub fn neighbor(&self, ordinal: usize, direction: Direction) -> Option<&GalleryItem> {
        self.step(ordinal, direction).and_then(|o| self.get(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Catalog {
        Catalog::from_sources(["a.mp4", "b.mp4", "c.mp4"])
    }

    #[test]
    fn ordinals_follow_list_position() {
        let catalog = abc();
        let ordinals: Vec<usize> = catalog.iter().map(GalleryItem::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        assert_eq!(catalog.get(1).map(GalleryItem::source_ref), Some("b.mp4"));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(abc().step(2, Direction::Next), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        assert_eq!(abc().step(0, Direction::Previous), Some(2));
    }

    #[test]
    fn single_item_catalog_steps_onto_itself() {
        let catalog = Catalog::from_sources(["only.mp4"]);
        assert_eq!(catalog.step(0, Direction::Next), Some(0));
        assert_eq!(catalog.step(0, Direction::Previous), Some(0));
    }

    #[test]
    fn empty_catalog_has_no_neighbors() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.step(0, Direction::Next), None);
        assert!(catalog.neighbor(0, Direction::Previous).is_none());
    }

    #[test]
    fn display_number_is_one_based_and_padded() {
        assert_eq!(GalleryItem::new("x", 2).display_number(), "03");
        assert_eq!(GalleryItem::new("x", 11).display_number(), "12");
    }

    #[test]
    fn posters_are_kept_per_entry() {
        let catalog = Catalog::from_entries([
            ("a.mp4", Some("a.jpg".to_string())),
            ("b.mp4", None),
        ]);
        assert_eq!(catalog.get(0).and_then(GalleryItem::poster), Some("a.jpg"));
        assert_eq!(catalog.get(1).and_then(GalleryItem::poster), None);
    }
}
