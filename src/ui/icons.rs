// SPDX-License-Identifier: MPL-2.0
//! Glyph helpers.
//!
//! Icons are plain text glyphs sized through the design tokens, so no
//! image assets ship with the binary. Each helper returns a fresh `Text`
//! widget the caller can color and place.

use iced::widget::{text, Text};

pub fn bell<'a>() -> Text<'a> {
    text("🔔")
}

pub fn bell_muted<'a>() -> Text<'a> {
    text("🔕")
}

pub fn cross<'a>() -> Text<'a> {
    text("✕")
}

pub fn refresh<'a>() -> Text<'a> {
    text("↻")
}

pub fn checkmark<'a>() -> Text<'a> {
    text("✓")
}

pub fn warning<'a>() -> Text<'a> {
    text("⚠")
}

pub fn info<'a>() -> Text<'a> {
    text("ℹ")
}

pub fn search<'a>() -> Text<'a> {
    text("🔍")
}

pub fn sun<'a>() -> Text<'a> {
    text("☀")
}

pub fn moon<'a>() -> Text<'a> {
    text("☾")
}

pub fn menu<'a>() -> Text<'a> {
    text("☰")
}

/// Applies a size from the sizing scale to a glyph.
pub fn sized(glyph: Text<'_>, size: f32) -> Text<'_> {
    glyph.size(size)
}
