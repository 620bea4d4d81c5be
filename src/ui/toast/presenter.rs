// SPDX-License-Identifier: MPL-2.0
//! Toast stack and lifecycle management.
//!
//! The `Presenter` owns every live toast and is driven by the application's
//! periodic tick. Showing is fire-and-forget: callers get no handle back
//! and no success signal.

use super::toast::{Severity, Toast, ToastId};
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID (the close button).
    Dismiss(ToastId),
}

/// Owns the toast stack, in call order (oldest first).
#[derive(Debug, Default)]
pub struct Presenter {
    toasts: Vec<Toast>,
}

impl Presenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast with the default lifetime.
    ///
    /// No deduplication: two calls with identical text produce two toasts.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toasts.push(Toast::new(severity, message, now));
    }

    /// Appends a toast with an explicit lifetime in milliseconds.
    /// A non-positive duration produces a persistent toast.
    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: i64,
        now: Instant,
    ) {
        self.toasts
            .push(Toast::with_duration_ms(severity, message, duration_ms, now));
    }

    /// Advances every lifecycle and detaches finished toasts.
    ///
    /// Should be called from the periodic tick (every 100ms or so) while
    /// any toast is alive.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain_mut(|toast| !toast.advance(now));
    }

    /// Starts the animate-out phase for one toast.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) {
            toast.dismiss(now);
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, now),
        }
    }

    /// The live toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Whether any toast is alive (gates the tick subscription).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
