// SPDX-License-Identifier: MPL-2.0
//! Purchase placement rendering.
//!
//! Every placement renders from [`PlacementView`], so all of them show the
//! same thing for the same loader state.

use super::component::{Message, State};
use crate::domain::embed::{Placement, PlacementView};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the purchase area of `placement`.
pub fn view<'a>(state: &'a State, placement: Placement, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.placement_view() {
        PlacementView::Loading => Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                AnimatedSpinner::new(palette::GOLD_500, state.spinner_rotation())
                    .with_size(spacing::LG)
                    .into_element(),
            )
            .push(
                Text::new(i18n.tr("embed-loading"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .into(),
        PlacementView::Widget(_) => button(
            Text::new(i18n.tr("embed-buy-button"))
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(240.0))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Purchase(placement))
        .into(),
        PlacementView::Failed {
            error,
            fallback_contact,
        } => Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr(error.i18n_key()))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .push(
                button(Text::new(i18n.tr("embed-retry-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::Retry),
            )
            .push(
                Text::new(i18n.tr_with_args(
                    "embed-fallback-contact",
                    &[("contact", fallback_contact)],
                ))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
            )
            .into(),
    };

    Container::new(body)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::card(radius::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embed::EmbedWidget;
    use crate::domain::error::EmbedLoadError;
    use crate::ui::embed::component::{Effect, Settings};
    use std::time::Duration;

    #[test]
    fn every_state_renders_for_every_placement() {
        let i18n = I18n::default();
        let mut state = State::new(Settings {
            script_url: "https://js.example.test/b.js".into(),
            timeout: Duration::from_secs(10),
            widget: EmbedWidget::new("b", "k"),
            fallback_contact: "hello@example.test".into(),
        });

        for placement in Placement::ALL {
            let _idle = view(&state, placement, &i18n);
        }

        let Effect::Dispatch { attempt, .. } =
            state.handle(Message::EnsureLoaded(Placement::Hero))
        else {
            panic!("expected a dispatch");
        };
        state.handle(Message::AttemptFinished {
            attempt,
            result: Err(EmbedLoadError::Network("offline".into())),
        });
        for placement in Placement::ALL {
            let _failed = view(&state, placement, &i18n);
        }
    }
}
