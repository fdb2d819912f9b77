// SPDX-License-Identifier: MPL-2.0
//! Gallery tile grid.
//!
//! Each tile selects its catalog ordinal in the viewer and shows the item's
//! poster when one is available locally.

use crate::domain::gallery::{Catalog, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::Message;
use iced::widget::{button, image, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

/// Tiles per row.
pub const COLUMNS: usize = 4;

const TILE_HEIGHT: f32 = 120.0;

/// Poster images, indexed by catalog ordinal.
#[derive(Debug, Clone, Default)]
pub struct Posters {
    handles: Vec<Option<image::Handle>>,
}

impl Posters {
    /// Builds a handle for every poster `locate` maps to an existing file.
    /// Items without one fall back to a play glyph.
    pub fn load(catalog: &Catalog, locate: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let handles = catalog
            .iter()
            .map(|item| {
                item.poster()
                    .and_then(&locate)
                    .filter(|path| path.is_file())
                    .map(image::Handle::from_path)
            })
            .collect();
        Self { handles }
    }

    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&image::Handle> {
        self.handles.get(ordinal).and_then(Option::as_ref)
    }
}

/// Renders the catalog as a grid of tiles.
pub fn view<'a>(catalog: &'a Catalog, posters: &'a Posters, i18n: &'a I18n) -> Element<'a, Message> {
    if catalog.is_empty() {
        return Container::new(
            Text::new(i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into();
    }

    let items: Vec<&GalleryItem> = catalog.iter().collect();
    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);

    for chunk in items.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
        for item in chunk {
            row = row.push(tile(item, posters.get(item.ordinal()), i18n));
        }
        // Keep tile widths equal on a short last row.
        for _ in chunk.len()..COLUMNS {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn tile<'a>(
    item: &'a GalleryItem,
    poster: Option<&image::Handle>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let number = Text::new(i18n.tr_with_args(
        "gallery-tile-label",
        &[("number", item.display_number().as_str())],
    ))
    .size(typography::TITLE_SM);

    let preview: Element<'a, Message> = match poster {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Text::new("▶")
            .size(typography::TITLE_LG)
            .color(palette::GRAY_200)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(number);

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fixed(TILE_HEIGHT))
    .style(styles::button::tile)
    .on_press(Message::Select(item.ordinal()))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        Catalog::from_entries([
            ("a.mp4", None),
            ("b.mp4", Some("b.jpg".to_string())),
            ("c.mp4", Some("missing.jpg".to_string())),
            ("d.mp4", None),
            ("e.mp4", None),
        ])
    }

    #[test]
    fn posters_only_for_existing_files() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("b.jpg"), b"jpeg").expect("write");

        let posters = Posters::load(&catalog(), |poster| Some(dir.path().join(poster)));
        assert!(posters.get(0).is_none());
        assert!(posters.get(1).is_some());
        assert!(posters.get(2).is_none());
        assert!(posters.get(99).is_none());

        let skipped = Posters::load(&catalog(), |_| None);
        assert!(skipped.get(1).is_none());
    }

    #[test]
    fn renders_partial_last_row_and_empty_catalog() {
        let i18n = I18n::default();
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("b.jpg"), b"jpeg").expect("write");
        let catalog = catalog();
        let posters = Posters::load(&catalog, |poster| Some(dir.path().join(poster)));
        let _grid = view(&catalog, &posters, &i18n);

        let empty = Catalog::default();
        let _empty = view(&empty, &Posters::default(), &i18n);
    }
}
