// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery viewer, the
//! buy-button loader and toast notifications.
//!
//! The `App` struct wires the components to their adapters (playback surface,
//! script host, window) and forwards messages to the handlers in `update`.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{MediaProbe, ScriptHost};
use crate::config;
use crate::domain::embed::Placement;
use crate::i18n::fluent::I18n;
use crate::infrastructure::playback_surface::is_remote;
use crate::infrastructure::{HttpScriptHost, PlaybackSurface};
use crate::ui::gallery::Posters;
use crate::ui::{embed, notifications, viewer};
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: viewer::State,
    embed: embed::State,
    notifications: notifications::Manager,
    window_id: Option<window::Id>,
    embed_fetch: Option<task::Handle>,
    surface: PlaybackSurface,
    posters: Posters,
    probe: Arc<dyn MediaProbe>,
    script_host: Arc<dyn ScriptHost>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("embed", self.embed.embed_state())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, builds the components and starts the shared
    /// embed load for every placement on the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let media_dir = flags
            .media_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| config.media_dir());
        log::info!("Serving media from {}", media_dir.display());

        let surface = PlaybackSurface::new(media_dir);
        let catalog = config.catalog();
        let posters = Posters::load(&catalog, |poster| {
            (!is_remote(poster)).then(|| surface.resolve(poster))
        });
        let viewer = viewer::State::new(
            catalog,
            Box::new(surface.clone()),
            viewer::Settings {
                settle_delay: config.settle_delay(),
                mute_policy: config.mute_policy(),
            },
        );
        let embed = embed::State::new(embed::Settings {
            script_url: config.embed.script_url.clone(),
            timeout: config.embed_timeout(),
            widget: config.embed_widget(),
            fallback_contact: config.embed.fallback_contact.clone(),
        });

        let mut app = App {
            i18n,
            viewer,
            embed,
            notifications: notifications::Manager::new(),
            window_id: None,
            embed_fetch: None,
            probe: Arc::new(surface.clone()),
            surface,
            posters,
            script_host: Arc::new(HttpScriptHost::new()),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let mut tasks: Vec<Task<Message>> = Placement::ALL
            .into_iter()
            .map(|placement| app.update(Message::Embed(embed::Message::EnsureLoaded(placement))))
            .collect();
        tasks.push(window::oldest().and_then(|id| Task::done(Message::WindowSeen(id))));

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.selection() {
            Some(selection) => {
                let video = self.i18n.tr_with_args(
                    "viewer-title",
                    &[("number", selection.item().display_number().as_str())],
                );
                format!("{video} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.viewer.is_open());
        let tick_sub = subscription::create_tick_subscription(
            self.viewer.needs_spinner_ticks() || self.embed.is_loading(),
            self.notifications.has_notifications(),
        );
        let frame_sub = subscription::create_frame_subscription(self.surface.is_playing());
        Subscription::batch([event_sub, tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            viewer: &mut self.viewer,
            embed: &mut self.embed,
            notifications: &mut self.notifications,
            window_id: &mut self.window_id,
            embed_fetch: &mut self.embed_fetch,
            probe: &self.probe,
            script_host: &self.script_host,
        };

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Embed(embed_message) => update::handle_embed_message(&mut ctx, embed_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            // Redraw only; the surface already holds the newest frame.
            Message::FrameTick(_) => Task::none(),
            Message::WindowSeen(id) => {
                *ctx.window_id = Some(id);
                Task::none()
            }
            Message::WindowResized(id) => update::handle_window_resized(&mut ctx, id),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            embed: &self.embed,
            notifications: &self.notifications,
            frame: self.surface.frame(),
            posters: &self.posters,
        })
    }
}
