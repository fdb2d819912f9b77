// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page section surface.
///
/// Derived from the active theme background with a slight opacity so it
/// reads in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        ..Default::default()
    }
}

/// Bordered card holding a purchase placement.
pub fn card(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: rad.into(),
            },
            ..Default::default()
        }
    }
}
