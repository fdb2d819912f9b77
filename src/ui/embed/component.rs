// SPDX-License-Identifier: MPL-2.0
//! Embed loader component.
//!
//! One instance per application owns the load state of the third-party
//! buy-button script. Every purchase placement asks it to load on mount and
//! renders from the same state, so the script is fetched once no matter how
//! many placements exist.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──ensure_loaded──▶ Loading(attempt) ──success──▶ Loaded
//!                              │
//!                              └──failure / timeout──▶ Failed ──retry──▶ Idle ──▶ Loading
//! ```
//!
//! Completions and timeouts carry their [`AttemptId`]; anything that does not
//! belong to the attempt currently in flight is ignored, which is how a
//! success arriving after the timeout fired is kept from un-failing the
//! loader.

use crate::domain::embed::{AttemptId, EmbedState, EmbedWidget, Placement, PlacementView};
use crate::domain::error::EmbedLoadError;
use std::time::Duration;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Messages for the embed loader.
#[derive(Debug, Clone)]
pub enum Message {
    /// A placement was mounted and needs the script.
    EnsureLoaded(Placement),
    /// The host finished `attempt`.
    AttemptFinished {
        attempt: AttemptId,
        result: Result<(), EmbedLoadError>,
    },
    /// The time budget of `attempt` ran out.
    AttemptTimedOut { attempt: AttemptId },
    /// User asked to try again from the error affordance.
    Retry,
    /// The page is going away.
    Teardown,
    /// The live widget in `placement` was pressed.
    Purchase(Placement),
    SpinnerTick,
}

/// Side effects the application should perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Request the script, answering with `AttemptFinished`, or with
    /// `AttemptTimedOut` once `timeout` has passed. The request is dropped
    /// when the budget runs out.
    Dispatch {
        attempt: AttemptId,
        url: String,
        timeout: Duration,
        /// Drop the artifact of the failed previous attempt first.
        remove_previous: bool,
    },
    /// Drop whatever the host injected for `url`.
    RemoveArtifact { url: String },
    /// Hand the widget identifiers to checkout.
    CheckoutRequested {
        placement: Placement,
        widget: EmbedWidget,
    },
}

/// Construction-time settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub script_url: String,
    pub timeout: Duration,
    pub widget: EmbedWidget,
    /// Shown next to the retry action when loading failed.
    pub fallback_contact: String,
}

/// Embed loader state.
#[derive(Debug, Clone)]
pub struct State {
    state: EmbedState,
    last_attempt: AttemptId,
    dispatched: u64,
    settings: Settings,
    spinner_rotation: f32,
}

impl State {
    /// Creates an idle loader. Nothing is requested until a placement mounts.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            state: EmbedState::Idle,
            last_attempt: AttemptId::zero(),
            dispatched: 0,
            settings,
            spinner_rotation: 0.0,
        }
    }

    /// Handle an embed loader message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::EnsureLoaded(placement) => {
                log::trace!("Placement {placement:?} needs the embed script");
                self.ensure_loaded()
            }
            Message::AttemptFinished { attempt, result } => {
                if self.state.in_flight() != Some(attempt) {
                    log::trace!("Ignoring late outcome of {attempt}");
                    return Effect::None;
                }
                match result {
                    Ok(()) => {
                        log::debug!("Embed script loaded ({attempt})");
                        self.state = EmbedState::Loaded;
                    }
                    Err(error) => {
                        log::warn!("Embed script failed ({attempt}): {error}");
                        self.state = EmbedState::Failed { error };
                    }
                }
                Effect::None
            }
            Message::AttemptTimedOut { attempt } => {
                if self.state.in_flight() != Some(attempt) {
                    return Effect::None;
                }
                let error = EmbedLoadError::TimedOut(self.settings.timeout);
                log::warn!("Embed script failed ({attempt}): {error}");
                self.state = EmbedState::Failed { error };
                Effect::None
            }
            Message::Retry => {
                if !self.state.is_failed() {
                    return Effect::None;
                }
                log::debug!("Retrying embed script load");
                self.ensure_loaded()
            }
            Message::Teardown => {
                self.state = EmbedState::Idle;
                self.spinner_rotation = 0.0;
                Effect::RemoveArtifact {
                    url: self.settings.script_url.clone(),
                }
            }
            Message::Purchase(placement) => {
                if !self.state.is_loaded() {
                    return Effect::None;
                }
                Effect::CheckoutRequested {
                    placement,
                    widget: self.settings.widget.clone(),
                }
            }
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Dispatches one attempt from `Idle` or `Failed`; no-op otherwise.
    ///
    /// The state check and the transition to `Loading` happen in the same
    /// call, with nothing in between that could let a second dispatch in.
    fn ensure_loaded(&mut self) -> Effect {
        if !self.state.needs_dispatch() {
            return Effect::None;
        }
        let remove_previous = self.state.is_failed();
        let attempt = self.last_attempt.next();
        self.last_attempt = attempt;
        self.dispatched += 1;
        self.state = EmbedState::Loading { attempt };
        log::debug!("Dispatching embed script request ({attempt})");

        Effect::Dispatch {
            attempt,
            url: self.settings.script_url.clone(),
            timeout: self.settings.timeout,
            remove_previous,
        }
    }

    /// What every placement renders right now.
    #[must_use]
    pub fn placement_view(&self) -> PlacementView<'_> {
        PlacementView::from_state(
            &self.state,
            &self.settings.widget,
            &self.settings.fallback_contact,
        )
    }

    #[must_use]
    pub fn embed_state(&self) -> &EmbedState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, EmbedState::Loading { .. })
    }

    /// Number of attempts dispatched since creation.
    #[must_use]
    pub fn dispatch_count(&self) -> u64 {
        self.dispatched
    }

    #[must_use]
    pub fn script_url(&self) -> &str {
        &self.settings.script_url
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
