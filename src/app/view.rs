// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The storefront page is a single scrollable column with one purchase
//! placement per section. The modal player and the toasts are layered on top
//! of it.

use super::Message;
use crate::domain::embed::Placement;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::gallery::Posters;
use crate::ui::{embed, gallery, styles, viewer};
use iced::widget::{image, scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a viewer::State,
    pub embed: &'a embed::State,
    pub notifications: &'a notifications::Manager,
    /// Latest frame of the playing video.
    pub frame: Option<image::Handle>,
    pub posters: &'a Posters,
}

/// Renders the page, the modal when open and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page(&ctx));

    if ctx.viewer.is_open() {
        layers = layers.push(viewer::view(ctx.viewer, ctx.i18n, ctx.frame.clone()).map(Message::Viewer));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let hero = section(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("page-hero-badge"))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .push(Text::new(i18n.tr("page-hero-title")).size(typography::TITLE_LG * 1.5))
            .push(
                Text::new(i18n.tr("page-hero-subtitle"))
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_200),
            )
            .push(placement(ctx, Placement::Hero)),
    );

    let showcase = section(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(heading(i18n, "page-gallery-heading"))
            .push(
                Text::new(i18n.tr("page-gallery-hint"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .push(gallery::view(ctx.viewer.catalog(), ctx.posters, i18n).map(Message::Viewer))
            .push(placement(ctx, Placement::Gallery)),
    );

    let pricing = section(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(heading(i18n, "page-pricing-heading"))
            .push(placement(ctx, Placement::Pricing)),
    );

    let closing = section(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(heading(i18n, "page-closing-heading"))
            .push(placement(ctx, Placement::Closing)),
    );

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(hero)
        .push(showcase)
        .push(pricing)
        .push(closing);

    Container::new(scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn placement<'a>(ctx: &ViewContext<'a>, placement: Placement) -> Element<'a, Message> {
    embed::view(ctx.embed, placement, ctx.i18n).map(Message::Embed)
}

fn heading<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Text::new(i18n.tr(key)).size(typography::TITLE_LG).into()
}

fn section<'a>(body: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(radius::LG))
        .into()
}
