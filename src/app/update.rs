// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Components decide; this module performs. Every component [`Effect`] is
//! turned into an Iced [`Task`] here, and every asynchronous completion is
//! routed back as a message tagged with the generation or attempt that
//! started it.
//!
//! [`Effect`]: crate::ui::viewer::Effect

use super::Message;
use crate::application::port::{MediaProbe, ScriptHost};
use crate::domain::embed::{AttemptId, EmbedWidget, Placement};
use crate::domain::error::EmbedLoadError;
use crate::i18n::fluent::I18n;
use crate::ui::embed;
use crate::ui::notifications;
use crate::ui::viewer;
use futures_util::future::BoxFuture;
use iced::{task, window, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a mut viewer::State,
    pub embed: &'a mut embed::State,
    pub notifications: &'a mut notifications::Manager,
    pub window_id: &'a mut Option<window::Id>,
    /// Abort handle of the embed script fetch last dispatched.
    pub embed_fetch: &'a mut Option<task::Handle>,
    pub probe: &'a Arc<dyn MediaProbe>,
    pub script_host: &'a Arc<dyn ScriptHost>,
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match ctx.viewer.handle(message) {
        viewer::Effect::None => Task::none(),
        viewer::Effect::LoadMedia { source, generation } => {
            log::debug!("Waiting for {source} to become playable ({generation})");
            Task::perform(ctx.probe.probe(&source), move |result| {
                Message::Viewer(match result {
                    Ok(()) => viewer::Message::MediaReady { generation },
                    Err(error) => viewer::Message::MediaFailed { generation, error },
                })
            })
        }
        viewer::Effect::ScheduleSettle { generation, delay } => {
            after(delay, Message::Viewer(viewer::Message::SettleElapsed { generation }))
        }
        viewer::Effect::SetFullscreen(requested) => set_fullscreen(*ctx.window_id, requested),
    }
}

/// Handles embed loader messages.
pub fn handle_embed_message(ctx: &mut UpdateContext<'_>, message: embed::Message) -> Task<Message> {
    match ctx.embed.handle(message) {
        embed::Effect::None => Task::none(),
        embed::Effect::Dispatch {
            attempt,
            url,
            timeout,
            remove_previous,
        } => {
            // At most one fetch of the script is ever open.
            abort_fetch(ctx);
            if remove_previous {
                ctx.script_host.remove(&url);
            }
            log::debug!("Dispatching {attempt} for {url}");
            let (fetch, handle) = Task::perform(
                settle_attempt(ctx.script_host.load(&url), attempt, timeout),
                Message::Embed,
            )
            .abortable();
            *ctx.embed_fetch = Some(handle);
            fetch
        }
        embed::Effect::RemoveArtifact { url } => {
            abort_fetch(ctx);
            ctx.script_host.remove(&url);
            Task::none()
        }
        embed::Effect::CheckoutRequested { placement, widget } => {
            handle_checkout_requested(ctx, placement, &widget);
            Task::none()
        }
    }
}

/// Races one script load against its budget.
///
/// When the budget runs out first the load future is dropped, which closes
/// its request, and the attempt is reported as timed out.
async fn settle_attempt(
    load: BoxFuture<'static, Result<(), EmbedLoadError>>,
    attempt: AttemptId,
    budget: Duration,
) -> embed::Message {
    match tokio::time::timeout(budget, load).await {
        Ok(result) => embed::Message::AttemptFinished { attempt, result },
        Err(_) => embed::Message::AttemptTimedOut { attempt },
    }
}

fn abort_fetch(ctx: &mut UpdateContext<'_>) {
    if let Some(fetch) = ctx.embed_fetch.take() {
        fetch.abort();
    }
}

fn handle_checkout_requested(
    ctx: &mut UpdateContext<'_>,
    placement: Placement,
    widget: &EmbedWidget,
) {
    log::info!(
        "Checkout requested from {placement:?} with button {}",
        widget.buy_button_id()
    );
    log::debug!("Widget markup: {}", widget.to_markup());
    ctx.notifications.push(
        notifications::Notification::info("notification-checkout-requested")
            .with_arg("placement", ctx.i18n.tr(placement.i18n_key())),
    );
}

/// Advances every time-driven piece of state.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();
    if ctx.viewer.needs_spinner_ticks() {
        tasks.push(handle_viewer_message(
            ctx,
            viewer::Message::Loading(viewer::subcomponents::loading::Message::SpinnerTick),
        ));
    }
    if ctx.embed.is_loading() {
        tasks.push(handle_embed_message(ctx, embed::Message::SpinnerTick));
    }
    ctx.notifications.tick(now);
    Task::batch(tasks)
}

/// Re-reads the window mode after a resize. Covers mode changes the window
/// manager makes on its own (for example leaving fullscreen with a system
/// shortcut).
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    match resync_target(ctx, id) {
        Some(id) => window::mode(id).map(|mode| {
            Message::Viewer(viewer::Message::FullscreenChanged(
                mode == window::Mode::Fullscreen,
            ))
        }),
        None => Task::none(),
    }
}

/// Records `id` as the main window. Returns it when the open modal needs
/// its fullscreen flag read back.
fn resync_target(ctx: &mut UpdateContext<'_>, id: window::Id) -> Option<window::Id> {
    *ctx.window_id = Some(id);
    ctx.viewer.is_open().then_some(id)
}

/// Tears down the embed loader and the modal, then closes the window.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let embed_task = handle_embed_message(ctx, embed::Message::Teardown);
    // Leaving fullscreen is moot once the window is gone.
    let _ = ctx.viewer.handle(viewer::Message::Close);
    log::debug!("Closing window {id:?}");
    Task::batch([embed_task, window::close(id)])
}

/// Switches the window mode and reports the mode actually in effect.
fn set_fullscreen(window_id: Option<window::Id>, requested: bool) -> Task<Message> {
    match fullscreen_target(window_id, requested) {
        Ok((id, mode)) => window::set_mode(id, mode).chain(window::mode(id).map(move |mode| {
            Message::Viewer(viewer::Message::FullscreenResolved {
                requested,
                actual: mode == window::Mode::Fullscreen,
            })
        })),
        Err(answer) => Task::done(Message::Viewer(answer)),
    }
}

/// Window and mode a fullscreen request applies to. Without a window the
/// request is answered at once as denied.
fn fullscreen_target(
    window_id: Option<window::Id>,
    requested: bool,
) -> Result<(window::Id, window::Mode), viewer::Message> {
    let Some(id) = window_id else {
        log::warn!("No window to switch fullscreen on");
        return Err(viewer::Message::FullscreenResolved {
            requested,
            actual: false,
        });
    };
    let mode = if requested {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    Ok((id, mode))
}

/// Emits `message` once `delay` has passed.
fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::media::testing::RecordingElement;
    use crate::domain::embed::EmbedState;
    use crate::domain::error::MediaLoadError;
    use crate::domain::gallery::Catalog;
    use crate::infrastructure::HttpScriptHost;
    use std::sync::Mutex;
    use tokio::io::AsyncReadExt;

    const URL: &str = "https://js.example.test/buy-button.js";

    /// Script host that records calls and never finishes a load.
    #[derive(Debug, Default)]
    struct CallLog {
        calls: Mutex<Vec<&'static str>>,
    }

    impl CallLog {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        fn record(&self, call: &'static str) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }
    }

    impl ScriptHost for CallLog {
        fn load(&self, _url: &str) -> BoxFuture<'static, Result<(), EmbedLoadError>> {
            self.record("load");
            Box::pin(futures_util::future::pending())
        }

        fn remove(&self, _url: &str) {
            self.record("remove");
        }
    }

    struct PendingProbe;

    impl MediaProbe for PendingProbe {
        fn probe(&self, _source: &str) -> BoxFuture<'static, Result<(), MediaLoadError>> {
            Box::pin(futures_util::future::pending())
        }
    }

    struct Harness {
        i18n: I18n,
        viewer: viewer::State,
        embed: embed::State,
        notifications: notifications::Manager,
        window_id: Option<window::Id>,
        embed_fetch: Option<task::Handle>,
        probe: Arc<dyn MediaProbe>,
        host: Arc<CallLog>,
        script_host: Arc<dyn ScriptHost>,
    }

    impl Harness {
        fn new() -> Self {
            let host = Arc::new(CallLog::default());
            let script_host: Arc<dyn ScriptHost> = host.clone();
            Self {
                i18n: I18n::default(),
                viewer: viewer::State::new(
                    Catalog::from_sources(["a.mp4", "b.mp4"]),
                    Box::new(RecordingElement::default()),
                    viewer::Settings {
                        settle_delay: Duration::from_millis(150),
                        mute_policy: Default::default(),
                    },
                ),
                embed: embed::State::new(embed::Settings {
                    script_url: URL.into(),
                    timeout: Duration::from_secs(10),
                    widget: EmbedWidget::new("buy_btn_1", "pk_test_1"),
                    fallback_contact: "sales@example.test".into(),
                }),
                notifications: notifications::Manager::new(),
                window_id: None,
                embed_fetch: None,
                probe: Arc::new(PendingProbe),
                host,
                script_host,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                viewer: &mut self.viewer,
                embed: &mut self.embed,
                notifications: &mut self.notifications,
                window_id: &mut self.window_id,
                embed_fetch: &mut self.embed_fetch,
                probe: &self.probe,
                script_host: &self.script_host,
            }
        }

        fn embed(&mut self, message: embed::Message) {
            let _ = handle_embed_message(&mut self.ctx(), message);
        }

        fn current_attempt(&self) -> AttemptId {
            match self.embed.embed_state() {
                EmbedState::Loading { attempt } => *attempt,
                other => panic!("expected an attempt in flight, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_placement_mount_loads_once() {
        let mut h = Harness::new();
        for placement in Placement::ALL {
            h.embed(embed::Message::EnsureLoaded(placement));
        }
        assert_eq!(h.host.calls(), vec!["load"]);
        assert!(h.embed_fetch.is_some());
    }

    #[test]
    fn retry_removes_failed_artifact_before_loading() {
        let mut h = Harness::new();
        h.embed(embed::Message::EnsureLoaded(Placement::Hero));
        let attempt = h.current_attempt();
        h.embed(embed::Message::AttemptFinished {
            attempt,
            result: Err(EmbedLoadError::Network("offline".into())),
        });

        h.embed(embed::Message::Retry);

        assert_eq!(h.host.calls(), vec!["load", "remove", "load"]);
        assert!(h.current_attempt() > attempt);
    }

    #[test]
    fn teardown_drops_fetch_and_artifact() {
        let mut h = Harness::new();
        h.embed(embed::Message::EnsureLoaded(Placement::Pricing));
        assert!(h.embed_fetch.is_some());

        h.embed(embed::Message::Teardown);

        assert!(h.embed_fetch.is_none());
        assert_eq!(h.host.calls(), vec!["load", "remove"]);
        assert_eq!(h.embed.embed_state(), &EmbedState::Idle);
    }

    #[test]
    fn fullscreen_without_window_is_denied() {
        assert!(matches!(
            fullscreen_target(None, true),
            Err(viewer::Message::FullscreenResolved {
                requested: true,
                actual: false
            })
        ));

        let id = window::Id::unique();
        assert!(matches!(
            fullscreen_target(Some(id), true),
            Ok((got, window::Mode::Fullscreen)) if got == id
        ));
        assert!(matches!(
            fullscreen_target(Some(id), false),
            Ok((got, window::Mode::Windowed)) if got == id
        ));
    }

    #[test]
    fn resize_reads_mode_back_only_while_modal_open() {
        let mut h = Harness::new();
        let id = window::Id::unique();

        assert_eq!(resync_target(&mut h.ctx(), id), None);
        assert_eq!(h.window_id, Some(id));

        let _ = handle_viewer_message(&mut h.ctx(), viewer::Message::Select(1));
        assert!(h.viewer.is_open());
        assert_eq!(resync_target(&mut h.ctx(), id), Some(id));
    }

    #[tokio::test]
    async fn finished_load_reports_its_outcome() {
        let attempt = AttemptId::zero().next();
        let message = settle_attempt(Box::pin(async { Ok(()) }), attempt, Duration::from_secs(5)).await;
        assert!(matches!(
            message,
            embed::Message::AttemptFinished { attempt: got, result: Ok(()) } if got == attempt
        ));
    }

    #[tokio::test]
    async fn timed_out_attempt_closes_its_connection() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind listener");
        let url = format!(
            "http://{}/buy-button.js",
            listener.local_addr().expect("listener address")
        );
        let host: Arc<dyn ScriptHost> = Arc::new(HttpScriptHost::new());
        let attempt = AttemptId::zero().next();

        // The server accepts and never answers.
        let (message, accepted) = tokio::join!(
            settle_attempt(host.load(&url), attempt, Duration::from_millis(200)),
            listener.accept()
        );
        assert!(matches!(
            message,
            embed::Message::AttemptTimedOut { attempt: got } if got == attempt
        ));

        // The client side must be gone before a retry could open a second one.
        let (mut socket, _) = accepted.expect("no connection was made");
        let mut buf = [0u8; 1024];
        let closed = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
            }
        })
        .await;
        assert!(closed.is_ok(), "timed out request is still open");
    }
}
