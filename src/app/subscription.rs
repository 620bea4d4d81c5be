// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources drive the app besides widget messages: raw window/keyboard
//! events (shortcuts, close requests), the fast animation tick, and the
//! slow notification poll. The timers only run while something actually
//! needs them.

use super::Message;
use crate::ui::metrics::TICK_INTERVAL;
use iced::keyboard::{self, key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes raw events to shortcut and lifecycle messages.
///
/// - Ctrl/Cmd+K focuses the search input
/// - Ctrl/Cmd+D toggles the theme
/// - Escape closes the dropdown or clears the search
/// - Window close requests flush persisted state first
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };

        // Escape works regardless of focus; character shortcuts only when
        // no widget consumed them.
        if let keyboard::Key::Named(key::Named::Escape) = key {
            return Some(Message::EscapePressed);
        }

        if matches!(status, event::Status::Captured) {
            return None;
        }

        if let keyboard::Key::Character(c) = key {
            if modifiers.command() {
                match c.as_str() {
                    "k" => return Some(Message::SearchFocusRequested),
                    "d" => {
                        return Some(Message::Navbar(crate::ui::navbar::Message::ToggleTheme))
                    }
                    _ => {}
                }
            }
        }

        None
    })
}

/// Creates the periodic tick subscription for toast lifecycles, counter
/// animation and the search debounce window.
pub fn create_tick_subscription(
    has_toasts: bool,
    counters_animating: bool,
    debounce_pending: bool,
) -> Subscription<Message> {
    if has_toasts || counters_animating || debounce_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the background notification poll.
///
/// Only runs while the dropdown is closed, so a user reading the open
/// list is never interrupted by a re-render. Opening the dropdown forces
/// an immediate load instead.
pub fn create_poll_subscription(
    panel_open: bool,
    poll_interval: Duration,
) -> Subscription<Message> {
    if panel_open {
        Subscription::none()
    } else {
        time::every(poll_interval).map(Message::PollTick)
    }
}
