// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together every component (poller, dropdown
//! panel, toasts, sidebar, metric cards) and translates their events into
//! side effects like HTTP requests and state persistence. Components are
//! explicit instances owned here and passed by reference; nothing reaches
//! for globals.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::ApiClient;
use crate::config::{self, Config};
use crate::notifications::Poller;
use crate::ui::metrics::MetricCards;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Presenter, Severity};
use crate::ui::{notification_panel, sidebar};
use crate::util::Debouncer;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Quiet window of the navbar search debounce.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Root Iced application state bridging UI components, the notification
/// poller and persisted preferences.
pub struct App {
    api: ApiClient,
    config: Config,
    theme_mode: ThemeMode,
    poller: Poller,
    panel: notification_panel::State,
    sidebar: sidebar::State,
    toasts: Presenter,
    metrics: MetricCards,
    /// Raw text in the search input.
    search_input: String,
    /// Query currently applied to the alert list (set after the debounce).
    search_query: String,
    search_debounce: Debouncer,
    /// Persisted application state (sidebar flag, metrics snapshot).
    app_state: AppState,
    /// Whether the post-startup success toast already fired.
    startup_announced: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panel_open", &self.panel.is_open())
            .field("notifications", &self.poller.notifications().len())
            .finish()
    }
}

impl App {
    /// Builds the initial state and kicks off the first notification load.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let config = config::load().unwrap_or_else(|err| {
            log::warn!("failed to load settings: {}", err);
            Config::default()
        });
        let theme_mode = config.theme.unwrap_or_default();

        let base_url = flags
            .api_base
            .clone()
            .unwrap_or_else(|| config.api_base_url().to_string());
        let api = ApiClient::new(base_url);

        let (app_state, state_warning) = AppState::load();
        let sidebar = sidebar::State::with_collapsed(app_state.sidebar_collapsed);

        let mut metrics = MetricCards::new();
        if let Some(snapshot) = app_state.last_metrics {
            metrics.apply_counts(snapshot.counts);
        }

        let mut toasts = Presenter::new();
        if let Some(warning) = state_warning {
            log::warn!("{}", warning);
            toasts.show(warning, Severity::Warning, Instant::now());
        }

        let mut app = Self {
            api,
            config,
            theme_mode,
            poller: Poller::new(),
            panel: notification_panel::State::new(),
            sidebar,
            toasts,
            metrics,
            search_input: String::new(),
            search_query: String::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            app_state,
            startup_announced: false,
        };

        let initial_load = app.request_load(false);
        (app, initial_load)
    }

    pub fn title(&self) -> String {
        "FarmaSystem - Painel".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.toasts.has_toasts(),
                self.metrics.is_animating(),
                self.search_debounce.is_pending(),
            ),
            subscription::create_poll_subscription(
                self.panel.is_open(),
                Duration::from_secs(self.config.poll_interval_secs()),
            ),
        ])
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests route through the update loop so persisted
        // state is flushed before exit.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
