// SPDX-License-Identifier: MPL-2.0
//! Metric cards with animated counters.
//!
//! Each card shows one severity total from the last successful load. When
//! new totals arrive the displayed value ramps linearly from zero to the
//! target over a fixed duration, advanced once per application tick. The
//! first seed (startup, possibly from the cached snapshot) animates a bit
//! slower than subsequent refreshes.

use crate::api::model::NotificationCounts;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::util::format_compact;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Duration;

/// Cadence of the application tick that advances animations.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ramp length for the first seed.
const INITIAL_ANIMATION_MS: u64 = 1500;

/// Ramp length for refreshes.
const REFRESH_ANIMATION_MS: u64 = 1000;

/// A linear ramp toward a target value, advanced by ticks.
///
/// Step-counted rather than accumulated, so the last tick always lands
/// exactly on the target regardless of float rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter {
    current: f64,
    target: u64,
    increment: f64,
    steps_remaining: u64,
}

impl Counter {
    /// Restarts the ramp from zero toward `target`.
    pub fn animate_to(&mut self, target: u64, duration_ms: u64) {
        let steps = (duration_ms / TICK_INTERVAL.as_millis() as u64).max(1);
        self.current = 0.0;
        self.target = target;
        self.increment = target as f64 / steps as f64;
        self.steps_remaining = if target > 0 { steps } else { 0 };
    }

    /// Advances one tick.
    pub fn tick(&mut self) {
        if self.steps_remaining == 0 {
            return;
        }
        self.steps_remaining -= 1;
        if self.steps_remaining == 0 {
            self.current = self.target as f64;
        } else {
            self.current += self.increment;
        }
    }

    /// The value currently displayed.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.current as u64
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.steps_remaining > 0
    }
}

/// The four severity cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricCards {
    seeded: bool,
    danger: Counter,
    warning: Counter,
    info: Counter,
    success: Counter,
}

impl MetricCards {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds fresh totals, restarting every ramp.
    pub fn apply_counts(&mut self, counts: NotificationCounts) {
        let duration = if self.seeded {
            REFRESH_ANIMATION_MS
        } else {
            INITIAL_ANIMATION_MS
        };
        self.seeded = true;

        self.danger.animate_to(u64::from(counts.danger), duration);
        self.warning.animate_to(u64::from(counts.warning), duration);
        self.info.animate_to(u64::from(counts.info), duration);
        self.success.animate_to(u64::from(counts.success), duration);
    }

    /// Advances all ramps one tick.
    pub fn tick(&mut self) {
        self.danger.tick();
        self.warning.tick();
        self.info.tick();
        self.success.tick();
    }

    /// Whether any ramp still runs (gates the tick subscription).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.danger.is_animating()
            || self.warning.is_animating()
            || self.info.is_animating()
            || self.success.is_animating()
    }

    /// Renders the row of cards.
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let cards = Row::new()
            .spacing(spacing::MD)
            .push(card("Críticos", self.danger.value(), palette::ERROR_500))
            .push(card("Alertas", self.warning.value(), palette::WARNING_500))
            .push(card("Informativos", self.info.value(), palette::INFO_500))
            .push(card("Resolvidos", self.success.value(), palette::SUCCESS_500));

        Container::new(cards).width(Length::Fill).into()
    }
}

fn card<'a, Message: 'a>(label: &'a str, value: u64, accent: Color) -> Element<'a, Message> {
    let value_text = Text::new(format_compact(value))
        .size(typography::METRIC)
        .color(accent);
    let label_text = Text::new(label)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let content = Column::new()
        .push(value_text)
        .push(label_text)
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Left);

    Container::new(content)
        .width(Length::Fixed(sizing::METRIC_CARD_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_target_within_duration() {
        let mut counter = Counter::default();
        counter.animate_to(10, 1000);

        // 1000ms at a 100ms tick is 10 steps.
        for _ in 0..10 {
            counter.tick();
        }
        assert_eq!(counter.value(), 10);
        assert!(!counter.is_animating());
    }

    #[test]
    fn counter_progresses_monotonically() {
        let mut counter = Counter::default();
        counter.animate_to(50, 1000);

        let mut previous = counter.value();
        for _ in 0..10 {
            counter.tick();
            assert!(counter.value() >= previous);
            previous = counter.value();
        }
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn re_animating_restarts_from_zero() {
        let mut counter = Counter::default();
        counter.animate_to(10, 1000);
        for _ in 0..10 {
            counter.tick();
        }

        counter.animate_to(4, 1000);
        assert_eq!(counter.value(), 0);
        assert!(counter.is_animating());
    }

    #[test]
    fn zero_target_is_immediately_done() {
        let mut counter = Counter::default();
        counter.animate_to(0, 1000);
        assert!(!counter.is_animating());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn cards_animate_after_fresh_counts() {
        let mut cards = MetricCards::new();
        assert!(!cards.is_animating());

        cards.apply_counts(NotificationCounts {
            total: 3,
            danger: 2,
            warning: 1,
            info: 0,
            success: 0,
        });
        assert!(cards.is_animating());

        // The initial ramp is 1500ms, so 15 ticks finish it.
        for _ in 0..15 {
            cards.tick();
        }
        assert!(!cards.is_animating());
        assert_eq!(cards.danger.value(), 2);
        assert_eq!(cards.warning.value(), 1);
    }
}
