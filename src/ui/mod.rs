// SPDX-License-Identifier: MPL-2.0
//! UI components for the dashboard.
//!
//! Each component is its own module with its own `Message` type; there is
//! no shared mutable state between them. The application root owns every
//! component instance and composes their views.

pub mod design_tokens;
pub mod icons;
pub mod metrics;
pub mod navbar;
pub mod notification_panel;
pub mod sidebar;
pub mod theming;
pub mod toast;
