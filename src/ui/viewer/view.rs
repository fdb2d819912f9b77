// SPDX-License-Identifier: MPL-2.0
//! Modal player view.
//!
//! Layout, top to bottom: title bar with the close action, the stage (spinner,
//! video frame or error panel depending on [`PlayerState`]) and the control
//! bar.

use super::component::{Message, State};
use crate::domain::gallery::Direction;
use crate::domain::viewer::PlayerState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the modal. Callers only show it while [`State::is_open`] holds.
///
/// `frame` is the latest picture of the attached source, drawn once the
/// player is ready.
pub fn view<'a>(
    state: &'a State,
    i18n: &'a I18n,
    frame: Option<image::Handle>,
) -> Element<'a, Message> {
    let Some(selection) = state.selection() else {
        return Space::new().into();
    };
    let item = selection.item();

    let title = Text::new(i18n.tr_with_args(
        "viewer-title",
        &[("number", item.display_number().as_str())],
    ))
    .size(typography::TITLE_MD)
    .color(palette::WHITE);

    let close_button = button(Text::new("✕").size(typography::TITLE_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close);

    let title_bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title_bar)
        .push(stage(state, i18n, frame))
        .push(control_bar(state, i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop)
        .into()
}

fn stage<'a>(
    state: &'a State,
    i18n: &'a I18n,
    frame: Option<image::Handle>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.player_state() {
        PlayerState::Closed => Space::new().into(),
        PlayerState::Opening => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::WHITE, state.spinner_rotation()).into_element())
            .push(
                Text::new(i18n.tr("viewer-loading"))
                    .size(typography::BODY)
                    .color(palette::GRAY_200),
            )
            .into(),
        PlayerState::Ready => {
            let status_key = if state.controls().muted {
                "viewer-playing-muted"
            } else {
                "viewer-playing"
            };
            let picture: Element<'a, Message> = match frame {
                Some(handle) => Image::new(handle)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain)
                    .into(),
                None => Text::new("▶").size(typography::TITLE_LG * 2.0).into(),
            };
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(picture)
                .push(
                    Text::new(i18n.tr(status_key))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_200),
                )
                .into()
        }
        PlayerState::PlaybackError => error_panel(state, i18n),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn error_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let key = state
        .last_error()
        .map_or("error-media-generic", |e| e.i18n_key());

    let heading = Text::new(i18n.tr("viewer-error-heading"))
        .size(typography::TITLE_SM)
        .color(palette::ERROR_500);
    let summary = Text::new(i18n.tr(key))
        .size(typography::BODY)
        .color(palette::GRAY_100);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("viewer-retry-button")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::RetryPlayback),
        )
        .push(
            button(Text::new(i18n.tr("viewer-close-button")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected)
                .on_press(Message::Close),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(summary)
            .push(actions),
    )
    .padding(spacing::LG)
    .style(styles::overlay::indicator(radius::MD))
    .into()
}

fn control_bar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let controls = state.controls();
    // Navigation is inert while the selection is still opening.
    let can_navigate = !state.player_state().is_opening();

    let nav = |label: &'static str, direction: Direction| {
        let b = button(Text::new(label).size(typography::TITLE_SM))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ));
        if can_navigate {
            b.on_press(Message::Navigate(direction))
        } else {
            b
        }
    };

    let mute_label = if controls.muted {
        i18n.tr("viewer-unmute-button")
    } else {
        i18n.tr("viewer-mute-button")
    };
    let mute_button = button(Text::new(mute_label))
        .padding([spacing::XS, spacing::MD])
        .style(if controls.muted {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .on_press(Message::ToggleMute);

    let fullscreen_label = if controls.fullscreen {
        i18n.tr("viewer-exit-fullscreen-button")
    } else {
        i18n.tr("viewer-fullscreen-button")
    };
    let mut fullscreen_button = button(Text::new(fullscreen_label))
        .padding([spacing::XS, spacing::MD])
        .style(if controls.fullscreen {
            styles::button::selected
        } else {
            styles::button::unselected
        });
    if !state.is_fullscreen_pending() {
        fullscreen_button = fullscreen_button.on_press(Message::ToggleFullscreen);
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(nav("◀", Direction::Previous))
        .push(Space::new().width(Length::Fill))
        .push(mute_button)
        .push(fullscreen_button)
        .push(Space::new().width(Length::Fill))
        .push(nav("▶", Direction::Next));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::overlay::controls_container)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::media::testing::RecordingElement;
    use crate::domain::error::MediaLoadError;
    use crate::domain::gallery::Catalog;
    use crate::ui::viewer::component::Settings;
    use std::time::Duration;

    fn state() -> State {
        State::new(
            Catalog::from_sources(["a.mp4", "b.mp4"]),
            Box::new(RecordingElement::default()),
            Settings {
                settle_delay: Duration::from_millis(150),
                mute_policy: Default::default(),
            },
        )
    }

    #[test]
    fn view_renders_every_player_state() {
        let i18n = I18n::default();
        let mut state = state();
        let _closed = view(&state, &i18n, None);

        state.handle(Message::Select(0));
        let _opening = view(&state, &i18n, None);

        let generation = state.selection().map(|s| s.generation());
        if let Some(generation) = generation {
            state.handle(Message::MediaFailed {
                generation,
                error: MediaLoadError::NotFound("a.mp4".into()),
            });
        }
        let _failed = view(&state, &i18n, None);

        state.handle(Message::RetryPlayback);
        if let Some(generation) = state.selection().map(|s| s.generation()) {
            state.handle(Message::MediaReady { generation });
        }
        let _ready = view(&state, &i18n, None);
        let frame = image::Handle::from_rgba(2, 2, vec![255u8; 16]);
        let _playing = view(&state, &i18n, Some(frame));
    }
}
