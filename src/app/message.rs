// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::model::NotificationsResponse;
use crate::error::ApiError;
use crate::ui::navbar;
use crate::ui::notification_panel;
use crate::ui::sidebar;
use crate::ui::toast;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sidebar(sidebar::Message),
    Panel(notification_panel::Message),
    Toast(toast::Message),
    /// Periodic animation tick (toasts, counters, search debounce).
    Tick(Instant),
    /// The background poll timer fired.
    PollTick(Instant),
    /// A notification fetch finished.
    NotificationsLoaded(Result<NotificationsResponse, ApiError>),
    /// The mark-all-read call finished.
    MarkAllCompleted(Result<(), ApiError>),
    /// A single-item mark-read call finished (best-effort, logged only).
    ItemMarkCompleted(Result<(), ApiError>),
    /// Ctrl/Cmd+K: focus the navbar search input.
    SearchFocusRequested,
    /// Escape: close the dropdown, else clear the search.
    EscapePressed,
    /// Window close was requested; state is flushed before closing.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional backend base URL override (e.g. `http://farma.local:8000`).
    pub api_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FARMA_DASH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `FARMA_DASH_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
