// SPDX-License-Identifier: MPL-2.0
//! `farma_dash` is a desktop dashboard client for the FarmaSystem
//! pharmacy-management backend, built with the Iced GUI framework.
//!
//! It renders the operations dashboard (metric cards, alert list, sidebar)
//! and carries the notification pipeline: a polling fetcher with an
//! in-flight guard, a dropdown panel with an unread badge, mark-read
//! actions and toast feedback.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod timefmt;
pub mod ui;
pub mod util;
