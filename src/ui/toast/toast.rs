// SPDX-License-Identifier: MPL-2.0
//! Core toast entity and its lifecycle.
//!
//! A toast moves through `Entering -> Showing -> Leaving -> detached`,
//! driven by the presenter's periodic tick. The transitions are one-way:
//! once a toast starts leaving nothing brings it back.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Lifetime applied when the caller does not pick one.
pub const DEFAULT_DURATION_MS: i64 = 4000;

/// Delay before the entry transition lands, one animation tick after
/// creation so the transition actually renders.
pub(super) const ENTER_DELAY: Duration = Duration::from_millis(50);

/// Length of the animate-out phase before detaching.
pub(super) const LEAVE_DELAY: Duration = Duration::from_millis(300);

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    /// Created; waiting one animation tick before showing.
    Entering { since: Instant },
    /// Fully visible; the auto-dismiss clock runs from `since`.
    Showing { since: Instant },
    /// Animating out; detached once the leave delay elapses.
    Leaving { since: Instant },
}

/// A single stacked feedback message.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    message: String,
    /// `None` means persistent: only an explicit dismiss removes it.
    duration: Option<Duration>,
    phase: Phase,
}

impl Toast {
    /// Creates a toast with the default lifetime.
    pub fn new(severity: Severity, message: impl Into<String>, now: Instant) -> Self {
        Self::with_duration_ms(severity, message, DEFAULT_DURATION_MS, now)
    }

    /// Creates a toast with an explicit lifetime in milliseconds.
    ///
    /// A non-positive duration produces a persistent toast.
    pub fn with_duration_ms(
        severity: Severity,
        message: impl Into<String>,
        duration_ms: i64,
        now: Instant,
    ) -> Self {
        let duration = if duration_ms > 0 {
            Some(Duration::from_millis(duration_ms as u64))
        } else {
            None
        };
        Self {
            id: ToastId::new(),
            severity,
            message: message.into(),
            duration,
            phase: Phase::Entering { since: now },
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the toast never auto-dismisses.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_none()
    }

    /// Whether the toast is mid enter/leave transition (renders faded).
    #[must_use]
    pub fn in_transition(&self) -> bool {
        !matches!(self.phase, Phase::Showing { .. })
    }

    /// Advances the lifecycle. Returns `true` when the toast should be
    /// detached from the stack.
    pub(super) fn advance(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering { since } => {
                if now >= since + ENTER_DELAY {
                    self.phase = Phase::Showing { since: now };
                }
                false
            }
            Phase::Showing { since } => {
                if let Some(duration) = self.duration {
                    if now >= since + duration {
                        self.phase = Phase::Leaving { since: now };
                    }
                }
                false
            }
            Phase::Leaving { since } => now >= since + LEAVE_DELAY,
        }
    }

    /// Starts the animate-out phase. A toast already leaving is left
    /// alone; the transition is one-way.
    pub(super) fn dismiss(&mut self, now: Instant) {
        if !matches!(self.phase, Phase::Leaving { .. }) {
            self.phase = Phase::Leaving { since: now };
        }
    }
}
