// SPDX-License-Identifier: MPL-2.0
//! Media viewer component encapsulating state and update logic.
//!
//! The viewer turns gallery clicks, navigation and control toggles into
//! commands on a [`MediaElement`] plus [`Effect`]s the application runs
//! asynchronously (media probing, settle timers, window mode changes).
//!
//! Every asynchronous outcome carries the [`Generation`] of the selection
//! that asked for it. Outcomes whose generation is not the current one are
//! dropped on arrival, so a slow probe for a video the user already left
//! can never flip the state of the video being shown now.

use super::subcomponents::{fullscreen, loading};
use crate::application::port::MediaElement;
use crate::domain::error::MediaLoadError;
use crate::domain::gallery::{Catalog, Direction, GalleryItem};
use crate::domain::viewer::{
    Generation, GenerationCounter, MutePolicy, PlaybackControls, PlayerState, Selection,
};
use iced::keyboard::{self, key::Named};
use std::time::Duration;

/// Messages emitted by the gallery, the modal and routed key presses.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery tile was activated.
    Select(usize),
    Navigate(Direction),
    Close,
    ToggleMute,
    ToggleFullscreen,
    /// Reload the current item after a playback error.
    RetryPlayback,
    /// The media for `generation` can start playing.
    MediaReady {
        generation: Generation,
    },
    /// The media for `generation` failed to load.
    MediaFailed {
        generation: Generation,
        error: MediaLoadError,
    },
    /// The settle delay of a navigation expired.
    SettleElapsed {
        generation: Generation,
    },
    /// A window mode request completed; `actual` is the mode now in effect.
    FullscreenResolved {
        requested: bool,
        actual: bool,
    },
    /// The environment reported a mode change it initiated itself.
    FullscreenChanged(bool),
    /// A key press while the modal is open.
    KeyPressed(keyboard::Key),
    Loading(loading::Message),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Probe `source` and answer with `MediaReady`/`MediaFailed` for `generation`.
    LoadMedia {
        source: String,
        generation: Generation,
    },
    /// Answer with `SettleElapsed` for `generation` after `delay`.
    ScheduleSettle {
        generation: Generation,
        delay: Duration,
    },
    /// Switch the window to fullscreen (`true`) or windowed mode and answer
    /// with `FullscreenResolved`.
    SetFullscreen(bool),
}

/// Construction-time settings.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Pause between stopping the old item and loading the next one.
    pub settle_delay: Duration,
    pub mute_policy: MutePolicy,
}

/// Complete viewer component state.
pub struct State {
    catalog: Catalog,
    selection: Option<Selection>,
    player: PlayerState,
    controls: PlaybackControls,
    mute_policy: MutePolicy,
    generations: GenerationCounter,
    settle_delay: Duration,
    element: Box<dyn MediaElement>,
    last_error: Option<MediaLoadError>,
    loading: loading::State,
    fullscreen: fullscreen::State,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("selection", &self.selection)
            .field("player", &self.player)
            .field("controls", &self.controls)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates a closed viewer over `catalog`, driving `element`.
    #[must_use]
    pub fn new(catalog: Catalog, element: Box<dyn MediaElement>, settings: Settings) -> Self {
        Self {
            catalog,
            selection: None,
            player: PlayerState::Closed,
            controls: PlaybackControls::initial(settings.mute_policy),
            mute_policy: settings.mute_policy,
            generations: GenerationCounter::new(),
            settle_delay: settings.settle_delay,
            element,
            last_error: None,
            loading: loading::State::default(),
            fullscreen: fullscreen::State::default(),
        }
    }

    /// Handle a viewer message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Select(ordinal) => {
                let Some(item) = self.catalog.get(ordinal).cloned() else {
                    log::warn!("Ignoring selection of unknown gallery item {ordinal}");
                    return Effect::None;
                };
                self.open(item)
            }
            Message::Navigate(direction) => self.navigate(direction),
            Message::Close => self.close(),
            Message::ToggleMute => {
                self.controls.muted = !self.controls.muted;
                if self.player.is_ready() {
                    self.element.set_muted(self.controls.muted);
                }
                Effect::None
            }
            Message::ToggleFullscreen => {
                if !self.player.is_open() {
                    return Effect::None;
                }
                let target = !self.controls.fullscreen;
                match self.fullscreen.handle(fullscreen::Message::Request { target }) {
                    fullscreen::Effect::Apply(target) => Effect::SetFullscreen(target),
                    _ => Effect::None,
                }
            }
            Message::RetryPlayback => {
                if !self.player.is_error() {
                    return Effect::None;
                }
                match self.selection.as_ref().map(|s| s.item().clone()) {
                    Some(item) => self.open(item),
                    None => Effect::None,
                }
            }
            Message::MediaReady { generation } => {
                if !self.accepts(generation) {
                    log::trace!("Dropping stale ready signal for {generation}");
                    return Effect::None;
                }
                self.player = PlayerState::Ready;
                self.loading.handle(loading::Message::Stop);
                self.element.set_muted(self.controls.muted);
                self.element.play();
                log::debug!("Playback ready for {generation}");
                Effect::None
            }
            Message::MediaFailed { generation, error } => {
                if !self.accepts(generation) {
                    log::trace!("Dropping stale load failure for {generation}: {error}");
                    return Effect::None;
                }
                log::warn!("Media failed to load for {generation}: {error}");
                self.player = PlayerState::PlaybackError;
                self.last_error = Some(error);
                self.loading.handle(loading::Message::Stop);
                Effect::None
            }
            Message::SettleElapsed { generation } => {
                if !self.accepts(generation) {
                    log::trace!("Dropping superseded settle timer for {generation}");
                    return Effect::None;
                }
                self.request_load()
            }
            Message::FullscreenResolved { requested, actual } => {
                let outcome = self
                    .fullscreen
                    .handle(fullscreen::Message::Resolved { requested, actual });
                if let fullscreen::Effect::Denied { denial, .. } = outcome {
                    log::warn!("{denial}");
                }
                if self.player.is_open() {
                    self.controls.fullscreen = actual;
                }
                Effect::None
            }
            Message::FullscreenChanged(actual) => {
                if self.player.is_open() && !self.fullscreen.is_pending() {
                    self.controls.fullscreen = actual;
                }
                Effect::None
            }
            Message::KeyPressed(key) => self.handle_key(&key),
            Message::Loading(msg) => {
                if let loading::Effect::SlowOpen(elapsed) = self.loading.handle(msg) {
                    log::debug!("Media still opening after {:.1}s", elapsed.as_secs_f32());
                }
                Effect::None
            }
        }
    }

    /// Routes a key press. Only meaningful while the modal is open.
    fn handle_key(&mut self, key: &keyboard::Key) -> Effect {
        if !self.player.is_open() {
            return Effect::None;
        }
        match key {
            keyboard::Key::Named(Named::Escape) if !self.player.is_opening() => self.close(),
            keyboard::Key::Named(Named::ArrowRight) => self.navigate(Direction::Next),
            keyboard::Key::Named(Named::ArrowLeft) => self.navigate(Direction::Previous),
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case("f") => {
                self.handle(Message::ToggleFullscreen)
            }
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case("m") => {
                self.handle(Message::ToggleMute)
            }
            _ => Effect::None,
        }
    }

    /// Makes `item` the current selection and loads it right away.
    fn open(&mut self, item: GalleryItem) -> Effect {
        if self.player.is_open() {
            self.element.stop();
        }
        self.begin(item);
        self.request_load()
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        if !self.player.is_open() || self.player.is_opening() {
            return Effect::None;
        }
        let Some(ordinal) = self.selection.as_ref().map(|s| s.item().ordinal()) else {
            return Effect::None;
        };
        let Some(item) = self.catalog.neighbor(ordinal, direction).cloned() else {
            return Effect::None;
        };

        self.element.stop();
        let generation = self.begin(item);
        Effect::ScheduleSettle {
            generation,
            delay: self.settle_delay,
        }
    }

    fn close(&mut self) -> Effect {
        if self.player.is_open() {
            self.element.stop();
            log::debug!("Viewer closed");
        }
        let exit_fullscreen = self.controls.fullscreen || self.fullscreen.is_pending();

        self.selection = None;
        self.player = PlayerState::Closed;
        self.last_error = None;
        self.loading.handle(loading::Message::Stop);
        self.fullscreen.clear();
        self.controls = self.controls.reset(self.mute_policy);

        if exit_fullscreen {
            Effect::SetFullscreen(false)
        } else {
            Effect::None
        }
    }

    /// Replaces the selection with `item` under a fresh generation and
    /// enters `Opening`.
    fn begin(&mut self, item: GalleryItem) -> Generation {
        let generation = self.generations.next_generation();
        log::debug!(
            "Opening item #{} ({}) as {generation}",
            item.display_number(),
            item.source_ref()
        );
        self.selection = Some(Selection::new(item, generation));
        self.player = PlayerState::Opening;
        self.last_error = None;
        self.loading.handle(loading::Message::Start);
        generation
    }

    /// Attaches the current item and asks for its readiness.
    fn request_load(&mut self) -> Effect {
        let Some(selection) = self.selection.as_ref() else {
            return Effect::None;
        };
        let source = selection.item().source_ref().to_string();
        let generation = selection.generation();
        self.element.attach(&source);
        Effect::LoadMedia { source, generation }
    }

    /// True if an outcome for `generation` still applies.
    fn accepts(&self, generation: Generation) -> bool {
        self.player.is_opening()
            && self
                .selection
                .as_ref()
                .is_some_and(|s| s.is_current(generation))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn player_state(&self) -> PlayerState {
        self.player
    }

    #[must_use]
    pub fn controls(&self) -> PlaybackControls {
        self.controls
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.player.is_open()
    }

    /// Load error of the current selection, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&MediaLoadError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn is_fullscreen_pending(&self) -> bool {
        self.fullscreen.is_pending()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.loading.spinner_rotation()
    }

    /// Returns true while the spinner needs animation ticks.
    #[must_use]
    pub fn needs_spinner_ticks(&self) -> bool {
        self.loading.is_active()
    }
}
