// SPDX-License-Identifier: MPL-2.0
//! In-window media element (implements [`MediaElement`] and [`MediaProbe`]).
//!
//! Attaching a source starts a decoder [`Session`] for it. The probe answers
//! once that session has decoded its first frame, so "ready" always means a
//! picture is on screen. The view reads the latest frame through
//! [`PlaybackSurface::frame`].
//!
//! Local sources are site-relative and resolve against the media directory;
//! `http(s)` sources are handed to FFmpeg as they are.

use crate::application::port::{MediaElement, MediaProbe};
use crate::domain::error::MediaLoadError;
use crate::infrastructure::decoder::{Readiness, Session};
use futures_util::future::BoxFuture;
use iced::widget::image;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Returns true if `source` must be fetched over HTTP.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Shared handle to the in-window element.
///
/// Cloning gives another handle to the same element: the viewer drives one
/// clone as its `Box<dyn MediaElement>`, the app reads frames from another.
#[derive(Debug, Clone)]
pub struct PlaybackSurface {
    media_dir: PathBuf,
    session: Arc<Mutex<Option<Session>>>,
    muted: Arc<AtomicBool>,
}

impl PlaybackSurface {
    /// Creates a surface resolving local sources against `media_dir`.
    #[must_use]
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
            session: Arc::default(),
            muted: Arc::default(),
        }
    }

    /// Resolves a local source to a path. A leading `/` still means "under
    /// the media directory".
    #[must_use]
    pub fn resolve(&self, source: &str) -> PathBuf {
        self.media_dir.join(source.trim_start_matches('/'))
    }

    /// Latest decoded frame of the attached source.
    #[must_use]
    pub fn frame(&self) -> Option<image::Handle> {
        self.with_session(Session::frame).flatten()
    }

    /// Whether frames are being decoded right now.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.with_session(Session::is_playing).unwrap_or(false)
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> Option<R> {
        let session = self.session.lock().ok()?;
        session.as_ref().map(f)
    }
}

impl MediaElement for PlaybackSurface {
    fn attach(&mut self, source: &str) {
        let remote = is_remote(source);
        let input = if remote {
            PathBuf::from(source)
        } else {
            self.resolve(source)
        };
        log::debug!("Surface attached to {}", input.display());

        let session = Session::spawn(source, input, remote, Arc::clone(&self.muted));
        if let Ok(mut current) = self.session.lock() {
            // The replaced session's thread exits on its own.
            *current = Some(session);
        }
    }

    fn stop(&mut self) {
        self.with_session(Session::stop);
    }

    fn play(&mut self) {
        if self.with_session(Session::play).is_none() {
            log::warn!("Play requested with no source attached");
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }
}

impl MediaProbe for PlaybackSurface {
    fn probe(&self, source: &str) -> BoxFuture<'static, Result<(), MediaLoadError>> {
        let source = source.to_string();
        let readiness = self
            .with_session(|s| (s.source() == source).then(|| s.readiness()))
            .flatten();

        Box::pin(async move {
            let Some(mut readiness) = readiness else {
                return Err(MediaLoadError::Io(format!("{source}: not attached")));
            };
            let outcome = readiness
                .wait_for(|r| *r != Readiness::Pending)
                .await
                .map(|r| r.clone());
            match outcome {
                Ok(Readiness::Ready) => Ok(()),
                Ok(Readiness::Failed(error)) => Err(error),
                Ok(Readiness::Pending) | Err(_) => {
                    Err(MediaLoadError::Io(format!("{source}: decoder stopped")))
                }
            }
        })
    }
}
