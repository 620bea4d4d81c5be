// SPDX-License-Identifier: MPL-2.0
//! Backend HTTP API: wire models, CSRF handling and the request client.
//!
//! The backend is the single source of truth for notifications; this module
//! is the only place that talks to it. Everything above it works with the
//! decoded [`model`] types and the [`crate::error::ApiError`] taxonomy.

pub mod client;
pub mod csrf;
pub mod model;

pub use client::ApiClient;
pub use csrf::CsrfStore;
pub use model::{
    MarkReadRequest, MarkReadResponse, Notification, NotificationCounts, NotificationKind,
    NotificationsResponse,
};
