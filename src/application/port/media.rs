// SPDX-License-Identifier: MPL-2.0
//! Media resource port definitions.
//!
//! The viewer needs very little from a media resource:
//!
//! - three imperative commands on the element showing it ([`MediaElement`]):
//!   stop (pause and rewind), set muted, play;
//! - one asynchronous readiness signal ([`MediaProbe`]): the resource either
//!   becomes playable or fails to load.
//!
//! # Design Notes
//!
//! - Commands are synchronous and infallible from the viewer's point of view
//! - Readiness is returned as a boxed future; callers run it through Iced's
//!   `Task` and deliver the outcome back as a generation-tagged message
//! - Uses domain types only (`MediaLoadError`)

use crate::domain::error::MediaLoadError;
use futures_util::future::BoxFuture;

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for the element that renders the selected media.
///
/// # Lifecycle
///
/// 1. `attach()` points the element at a new source (does not start playback)
/// 2. the viewer waits for the probe to report readiness
/// 3. `set_muted()` + `play()` once ready
/// 4. `stop()` before switching source or closing
pub trait MediaElement: Send {
    /// Points the element at `source`.
    fn attach(&mut self, source: &str);

    /// Pauses playback and resets the position to the start.
    fn stop(&mut self);

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);
}

// =============================================================================
// MediaProbe Trait
// =============================================================================

/// Port reporting whether a media resource can start playing.
pub trait MediaProbe: Send + Sync {
    /// Resolves once `source` is playable, or with the reason it is not.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaLoadError`] if the resource is missing, unreachable
    /// or not in a supported container.
    fn probe(&self, source: &str) -> BoxFuture<'static, Result<(), MediaLoadError>>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording doubles shared by viewer tests.

    use super::*;
    use std::sync::{Arc, Mutex};

    /// A command observed by [`RecordingElement`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Attach(String),
        Stop,
        Play,
        SetMuted(bool),
    }

    /// Element double that records every command it receives.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingElement {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl RecordingElement {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub fn clear(&self) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.clear();
            }
        }

        fn record(&self, call: Call) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }
    }

    impl MediaElement for RecordingElement {
        fn attach(&mut self, source: &str) {
            self.record(Call::Attach(source.to_string()));
        }

        fn stop(&mut self) {
            self.record(Call::Stop);
        }

        fn play(&mut self) {
            self.record(Call::Play);
        }

        fn set_muted(&mut self, muted: bool) {
            self.record(Call::SetMuted(muted));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingElement};
    use super::*;

    fn _assert_object_safe(_: &dyn MediaElement, _: &dyn MediaProbe) {}

    #[test]
    fn recording_element_keeps_call_order() {
        let handle = RecordingElement::default();
        let mut element: Box<dyn MediaElement> = Box::new(handle.clone());
        element.attach("a.mp4");
        element.set_muted(true);
        element.play();
        element.stop();
        assert_eq!(
            handle.calls(),
            vec![
                Call::Attach("a.mp4".into()),
                Call::SetMuted(true),
                Call::Play,
                Call::Stop
            ]
        );
    }
}
