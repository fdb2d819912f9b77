// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn solid(background: Color, text_color: Color, border: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    solid(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Primary action (buy, retry).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            solid(palette::GOLD_500, WHITE, palette::GOLD_600, shadow::SM)
        }
        button::Status::Hovered => {
            solid(palette::GOLD_400, WHITE, palette::GOLD_500, shadow::MD)
        }
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Engaged toggle (muted, fullscreen).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled_style(theme),
        button::Status::Hovered => {
            solid(palette::GOLD_600, WHITE, palette::GOLD_400, shadow::SM)
        }
        _ => solid(palette::GOLD_700, WHITE, palette::GOLD_500, shadow::SM),
    }
}

/// Secondary action or released toggle.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Disabled => disabled_style(theme),
        button::Status::Hovered => {
            let hover = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            solid(hover, text_color, palette::GOLD_500, shadow::SM)
        }
        _ => solid(background, text_color, palette::GRAY_400, shadow::NONE),
    }
}

/// Translucent button drawn over the modal backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery tile.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let surface = theme.extended_palette().background.weak.color;
    let (border, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::GOLD_500, shadow::MD),
        _ => (Color::TRANSPARENT, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(surface)),
        text_color: theme.extended_palette().background.weak.text,
        border: Border {
            color: border,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}
