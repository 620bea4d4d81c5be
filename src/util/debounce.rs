// SPDX-License-Identifier: MPL-2.0
//! The shared debounce helper.
//!
//! Every input-driven behavior (currently the navbar search) goes through
//! this single implementation instead of growing its own copy.
//!
//! The helper is deliberately passive: [`Debouncer::poke`] arms a deadline,
//! and the owner asks [`Debouncer::fire`] from its periodic tick whether the
//! deadline has passed. That keeps the type free of timers and trivially
//! testable with synthetic instants.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Registers an input event, pushing the deadline out by a full window.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns `true` exactly once when the quiet window has elapsed.
    ///
    /// A firing disarms the debouncer; subsequent calls return `false`
    /// until the next [`poke`](Self::poke).
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is armed and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any armed deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn does_not_fire_before_the_window_elapses() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.poke(start);
        assert!(!debouncer.fire(start + Duration::from_millis(100)));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn fires_once_after_the_window() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.poke(start);
        assert!(debouncer.fire(start + WINDOW));
        assert!(!debouncer.fire(start + WINDOW + Duration::from_millis(100)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn repeated_pokes_push_the_deadline_out() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.poke(start);
        debouncer.poke(start + Duration::from_millis(200));

        // The first deadline would have been at start + 300ms.
        assert!(!debouncer.fire(start + Duration::from_millis(350)));
        assert!(debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_disarms_without_firing() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.poke(start);
        debouncer.cancel();
        assert!(!debouncer.fire(start + WINDOW * 2));
    }
}
