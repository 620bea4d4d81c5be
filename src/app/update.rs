// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every side effect funnels through here: component events become HTTP
//! tasks, toasts, or persistence writes. The poller decides *whether* a
//! request may go out; this module only executes what it allows.

use super::{persisted_state::MetricsSnapshot, App, Message};
use crate::api::model::MarkReadRequest;
use crate::notifications::{ItemAction, LoadOutcome, MarkAllEffect};
use crate::ui::toast::Severity;
use crate::ui::{navbar, notification_panel, sidebar};
use chrono::Utc;
use iced::Task;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar_event(navbar::update(message)),
            Message::Sidebar(message) => {
                if let sidebar::Event::CollapsedChanged(collapsed) =
                    sidebar::update(&mut self.sidebar, message)
                {
                    self.app_state.sidebar_collapsed = collapsed;
                    self.persist_app_state();
                }
                Task::none()
            }
            Message::Panel(message) => self.handle_panel_message(message),
            Message::Toast(message) => {
                self.toasts.handle_message(&message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.toasts.tick(now);
                self.metrics.tick();
                if self.search_debounce.fire(now) {
                    self.search_query = self.search_input.clone();
                }
                Task::none()
            }
            Message::PollTick(_) => {
                // The subscription is already gated on the dropdown being
                // closed; the check repeats here against a tick that was
                // queued right as the dropdown opened.
                if self.panel.is_open() {
                    Task::none()
                } else {
                    self.request_load(false)
                }
            }
            Message::NotificationsLoaded(result) => self.handle_load_completed(result),
            Message::MarkAllCompleted(result) => {
                if let Err(err) = &result {
                    log::error!("mark-all-read failed: {}", err);
                }
                match self.poller.complete_mark_all(result) {
                    MarkAllEffect::ShowSuccessAndReload => {
                        self.toasts.show(
                            "Todas as notificações foram marcadas como lidas",
                            Severity::Success,
                            Instant::now(),
                        );
                        self.request_load(true)
                    }
                    MarkAllEffect::ShowError => {
                        self.toasts.show(
                            "Erro ao marcar notificações como lidas",
                            Severity::Error,
                            Instant::now(),
                        );
                        Task::none()
                    }
                }
            }
            Message::ItemMarkCompleted(result) => {
                // Best-effort: never surfaced, never blocks navigation.
                if let Err(err) = result {
                    log::error!("mark-read failed: {}", err);
                }
                Task::none()
            }
            Message::SearchFocusRequested => {
                self.toasts.show_for(
                    "Digite para pesquisar...",
                    Severity::Info,
                    2000,
                    Instant::now(),
                );
                iced::widget::operation::focus(iced::widget::Id::new(navbar::SEARCH_INPUT_ID))
            }
            Message::EscapePressed => {
                if self.panel.is_open() {
                    self.panel.close();
                } else if !self.search_input.is_empty() {
                    self.search_input.clear();
                    self.search_query.clear();
                    self.search_debounce.cancel();
                }
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.persist_app_state();
                iced::window::close(id)
            }
        }
    }

    fn handle_navbar_event(&mut self, event: navbar::Event) -> Task<Message> {
        match event {
            navbar::Event::SearchChanged(query) => {
                self.search_input = query;
                self.search_debounce.poke(Instant::now());
                // Clearing the field applies immediately; only typing is
                // debounced.
                if self.search_input.is_empty() {
                    self.search_query.clear();
                    self.search_debounce.cancel();
                }
                Task::none()
            }
            navbar::Event::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.config.theme = Some(self.theme_mode);
                if let Err(err) = crate::config::save(&self.config) {
                    log::warn!("failed to save settings: {}", err);
                }
                self.toasts.show_for(
                    self.theme_mode.activation_message(),
                    Severity::Success,
                    2000,
                    Instant::now(),
                );
                Task::none()
            }
            navbar::Event::ToggleNotifications => {
                self.handle_panel_message(notification_panel::Message::ToggleDropdown)
            }
            navbar::Event::ToggleSidebar => self.update(Message::Sidebar(
                sidebar::Message::ToggleCollapsed,
            )),
        }
    }

    pub(super) fn handle_panel_message(
        &mut self,
        message: notification_panel::Message,
    ) -> Task<Message> {
        match notification_panel::update(&mut self.panel, message) {
            notification_panel::Event::None => Task::none(),
            // Opening always forces one immediate load.
            notification_panel::Event::Opened => self.request_load(true),
            notification_panel::Event::RequestLoad { force } => self.request_load(force),
            notification_panel::Event::RequestMarkAll => {
                let api = self.api.clone();
                Task::perform(
                    async move { api.mark_read(MarkReadRequest::all()).await },
                    Message::MarkAllCompleted,
                )
            }
            notification_panel::Event::ItemActivated(id) => {
                match self.poller.item_action(&id) {
                    Some(action) => self.activate_item(action),
                    None => Task::none(),
                }
            }
        }
    }

    /// Asks the poller for permission and issues the fetch. While a
    /// request is in flight this is a no-op, forced or not.
    pub(super) fn request_load(&mut self, force: bool) -> Task<Message> {
        if !self.poller.begin_load(force) {
            return Task::none();
        }
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_notifications().await },
            Message::NotificationsLoaded,
        )
    }

    fn handle_load_completed(
        &mut self,
        result: Result<crate::api::model::NotificationsResponse, crate::error::ApiError>,
    ) -> Task<Message> {
        match self.poller.complete_load(result) {
            LoadOutcome::Loaded => {
                self.metrics.apply_counts(self.poller.counts());
                self.app_state.last_metrics = Some(MetricsSnapshot {
                    counts: self.poller.counts(),
                    timestamp: Utc::now(),
                });
                self.persist_app_state();

                if !self.startup_announced {
                    self.startup_announced = true;
                    self.toasts.show_for(
                        "Dashboard carregado com sucesso!",
                        Severity::Success,
                        3000,
                        Instant::now(),
                    );
                }
            }
            LoadOutcome::Failed { forced } => {
                // Background polls fail quietly into the inline state;
                // a user-initiated refresh gets a toast as well.
                if forced {
                    if let Some(message) = self.poller.error() {
                        self.toasts
                            .show(message, Severity::Error, Instant::now());
                    }
                }
            }
        }
        Task::none()
    }

    /// Fires the best-effort mark-read and opens the click-through URL.
    /// Navigation is not gated on the mark-read call completing.
    fn activate_item(&mut self, action: ItemAction) -> Task<Message> {
        let api = self.api.clone();
        let id = action.id.clone();
        let mark = Task::perform(
            async move { api.mark_read(MarkReadRequest::one(id)).await },
            Message::ItemMarkCompleted,
        );

        if let Some(url) = action.open_url {
            let absolute = self.absolute_url(&url);
            if let Err(err) = webbrowser::open(&absolute) {
                log::warn!("failed to open {}: {}", absolute, err);
            }
        }

        mark
    }

    /// Resolves a backend-relative action URL against the API base.
    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.api.base_url(), url)
        }
    }

    pub(super) fn persist_app_state(&self) {
        if let Some(warning) = self.app_state.save() {
            log::warn!("{}", warning);
        }
    }
}
