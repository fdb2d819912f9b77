// SPDX-License-Identifier: MPL-2.0
//! Purchase placements and the widget markup they render.

use super::state::EmbedState;
use crate::domain::error::EmbedLoadError;

/// Custom element tag registered by the buy-button script.
pub const WIDGET_TAG: &str = "stripe-buy-button";

/// Where a purchase button sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Under the headline.
    Hero,
    /// Under the video gallery.
    Gallery,
    /// Inside the pricing card.
    Pricing,
    /// Final call to action above the FAQ.
    Closing,
}

impl Placement {
    /// Every placement, in page order.
    pub const ALL: [Placement; 4] = [
        Placement::Hero,
        Placement::Gallery,
        Placement::Pricing,
        Placement::Closing,
    ];

    /// Returns the i18n key naming this placement.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Placement::Hero => "placement-hero",
            Placement::Gallery => "placement-gallery",
            Placement::Pricing => "placement-pricing",
            Placement::Closing => "placement-closing",
        }
    }
}

/// The third-party widget, configured with two opaque identifiers.
///
/// The identifiers are carried verbatim; nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedWidget {
    buy_button_id: String,
    publishable_key: String,
}

impl EmbedWidget {
    #[must_use]
    pub fn new(buy_button_id: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            buy_button_id: buy_button_id.into(),
            publishable_key: publishable_key.into(),
        }
    }

    #[must_use]
    pub fn buy_button_id(&self) -> &str {
        &self.buy_button_id
    }

    #[must_use]
    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    /// Renders the custom element markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            "<{WIDGET_TAG} buy-button-id=\"{}\" publishable-key=\"{}\"></{WIDGET_TAG}>",
            escape_attribute(&self.buy_button_id),
            escape_attribute(&self.publishable_key),
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// What a placement shows for a given embed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementView<'a> {
    /// Spinner while nothing usable is available yet.
    Loading,
    /// The live widget.
    Widget(&'a EmbedWidget),
    /// Error with a retry action and a static contact line.
    Failed {
        error: &'a EmbedLoadError,
        fallback_contact: &'a str,
    },
}

impl<'a> PlacementView<'a> {
    /// Derives the view for `state`. Every placement gets the same answer for
    /// the same state.
    #[must_use]
    pub fn from_state(
        state: &'a EmbedState,
        widget: &'a EmbedWidget,
        fallback_contact: &'a str,
    ) -> Self {
        match state {
            EmbedState::Idle | EmbedState::Loading { .. } => PlacementView::Loading,
            EmbedState::Loaded => PlacementView::Widget(widget),
            EmbedState::Failed { error } => PlacementView::Failed {
                error,
                fallback_contact,
            },
        }
    }
}
