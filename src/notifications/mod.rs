// SPDX-License-Identifier: MPL-2.0
//! Client-side notification state.
//!
//! The [`poller::Poller`] owns the transient copy of the backend's
//! notification list and the fetch state machine around it. It performs no
//! I/O itself: the application update loop asks it whether a request may be
//! issued, runs the request, and feeds the completion back in.

pub mod poller;

pub use poller::{ItemAction, LoadOutcome, MarkAllEffect, Poller};
