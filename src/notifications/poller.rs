// SPDX-License-Identifier: MPL-2.0
//! The notification fetch state machine.
//!
//! One instance exists per window. Its lifecycle is `Idle -> Loading ->
//! Idle`, with a boolean in-flight guard: while a request is pending no
//! second request is issued, not even a forced one, so two responses can
//! never race on the list. A response that arrives late still lands
//! wholesale; there is no cancellation of in-flight work.
//!
//! The poller never sorts: the backend owns ordering and the list is
//! rendered exactly as received.

use crate::api::model::{Notification, NotificationCounts, NotificationsResponse};
use crate::error::ApiError;

/// Fetch phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        /// Whether the pending load was user-initiated (drives the
        /// refresh spinner, nothing else).
        forced: bool,
    },
}

/// What a finished load amounted to, for the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed {
        /// Whether the failed load had been user-initiated.
        forced: bool,
    },
}

/// What a finished mark-all-read call asks the update loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAllEffect {
    /// Show the success toast and force one reload.
    ShowSuccessAndReload,
    /// Show the error toast; state is left untouched and the action is
    /// safe to retry.
    ShowError,
}

/// Click-through descriptor for a notification item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    /// Identifier to mark read, best-effort.
    pub id: String,
    /// URL to open, when the item carries a real one.
    pub open_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct Poller {
    phase: Phase,
    notifications: Vec<Notification>,
    counts: NotificationCounts,
    /// Inline message for the list area; displaces the list until the
    /// next successful load.
    error: Option<&'static str>,
    loaded_once: bool,
}

impl Poller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks to issue a load. Returns `true` when the caller should start
    /// the request; `false` means one is already in flight and the call
    /// was a no-op, regardless of `force`.
    pub fn begin_load(&mut self, force: bool) -> bool {
        if matches!(self.phase, Phase::Loading { .. }) {
            return false;
        }
        self.phase = Phase::Loading { forced: force };
        true
    }

    /// Applies a finished load.
    ///
    /// Success replaces the list and counts wholesale and clears any error
    /// state. Failure records the inline error message and leaves the
    /// previous counts (and therefore the badge) untouched; recovery is
    /// the next scheduled poll or a manual refresh, never an automatic
    /// retry.
    pub fn complete_load(
        &mut self,
        result: Result<NotificationsResponse, ApiError>,
    ) -> LoadOutcome {
        let forced = matches!(self.phase, Phase::Loading { forced: true });
        self.phase = Phase::Idle;
        self.loaded_once = true;

        match result {
            Ok(response) => {
                self.notifications = response.notifications;
                self.counts = response.counts;
                self.error = None;
                LoadOutcome::Loaded
            }
            Err(err) => {
                self.error = Some(err.user_message());
                LoadOutcome::Failed { forced }
            }
        }
    }

    /// Applies a finished mark-all-read call.
    pub fn complete_mark_all(&mut self, result: Result<(), ApiError>) -> MarkAllEffect {
        match result {
            Ok(()) => MarkAllEffect::ShowSuccessAndReload,
            Err(_) => MarkAllEffect::ShowError,
        }
    }

    /// Looks up the click-through action for an item.
    ///
    /// Returns `None` for identifiers the current list does not contain
    /// (e.g. a click racing a reload that dropped the item).
    #[must_use]
    pub fn item_action(&self, id: &str) -> Option<ItemAction> {
        let item = self.notifications.iter().find(|n| n.id == id)?;
        Some(ItemAction {
            id: item.id.clone(),
            open_url: if item.has_action() {
                item.action_url.clone()
            } else {
                None
            },
        })
    }

    /// The cached list, in backend order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn counts(&self) -> NotificationCounts {
        self.counts
    }

    /// The unread badge value; the badge is hidden at zero.
    #[must_use]
    pub fn badge_count(&self) -> u32 {
        self.counts.badge_total()
    }

    /// Header label above the list.
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.notifications.len() {
            0 => "Nenhuma notificação".to_string(),
            1 => "1 notificação".to_string(),
            n => format!("{} notificações", n),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Whether a user-initiated load is pending (spins the refresh button).
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        matches!(self.phase, Phase::Loading { forced: true })
    }

    /// Inline error message for the list area, if the last load failed.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether any load has completed yet (drives the initial spinner).
    #[must_use]
    pub fn loaded_once(&self) -> bool {
        self.loaded_once
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::NotificationKind;
    use chrono::Utc;

    fn notification(id: &str, kind: NotificationKind, action_url: Option<&str>) -> Notification {
        Notification {
            id: id.to_string(),
            kind,
            icon: "fas fa-pills".to_string(),
            title: format!("title {}", id),
            message: format!("message {}", id),
            timestamp: Utc::now(),
            action_url: action_url.map(str::to_string),
        }
    }

    fn response(notifications: Vec<Notification>, danger: u32, warning: u32) -> NotificationsResponse {
        NotificationsResponse {
            success: true,
            counts: NotificationCounts {
                total: notifications.len() as u32,
                danger,
                warning,
                info: 0,
                success: 0,
            },
            notifications,
        }
    }

    #[test]
    fn second_load_is_suppressed_while_pending() {
        let mut poller = Poller::new();
        assert!(poller.begin_load(false));
        assert!(!poller.begin_load(false));
    }

    #[test]
    fn forced_load_does_not_bypass_the_guard() {
        let mut poller = Poller::new();
        assert!(poller.begin_load(false));
        assert!(!poller.begin_load(true));
        assert!(!poller.is_refreshing());
    }

    #[test]
    fn load_allowed_again_after_completion() {
        let mut poller = Poller::new();
        assert!(poller.begin_load(false));
        poller.complete_load(Ok(response(Vec::new(), 0, 0)));
        assert!(poller.begin_load(true));
        assert!(poller.is_refreshing());
    }

    #[test]
    fn empty_load_hides_badge_and_shows_placeholder_label() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        let outcome = poller.complete_load(Ok(response(Vec::new(), 0, 0)));

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(poller.badge_count(), 0);
        assert!(poller.notifications().is_empty());
        assert_eq!(poller.count_label(), "Nenhuma notificação");
        assert!(poller.error().is_none());
    }

    #[test]
    fn successful_load_replaces_list_wholesale() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![notification("old", NotificationKind::Info, None)],
            0,
            0,
        )));

        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![
                notification("b", NotificationKind::Danger, Some("/inventory/stock/")),
                notification("a", NotificationKind::Warning, None),
            ],
            1,
            1,
        )));

        // Order is exactly as received; no client-side sorting.
        let ids: Vec<&str> = poller.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(poller.badge_count(), 2);
        assert_eq!(poller.count_label(), "2 notificações");
    }

    #[test]
    fn failed_load_keeps_previous_badge_and_sets_inline_error() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![notification("a", NotificationKind::Danger, None)],
            1,
            0,
        )));

        poller.begin_load(false);
        let outcome = poller.complete_load(Err(ApiError::Transport("refused".into())));

        assert_eq!(outcome, LoadOutcome::Failed { forced: false });
        assert_eq!(poller.badge_count(), 1);
        assert_eq!(poller.error(), Some("Erro de conexão"));
    }

    #[test]
    fn failed_forced_load_reports_forced_outcome() {
        let mut poller = Poller::new();
        poller.begin_load(true);
        let outcome = poller.complete_load(Err(ApiError::Rejected));

        assert_eq!(outcome, LoadOutcome::Failed { forced: true });
        assert_eq!(poller.error(), Some("Erro ao carregar notificações"));
    }

    #[test]
    fn mark_all_success_requests_exactly_one_reload() {
        let mut poller = Poller::new();
        let effect = poller.complete_mark_all(Ok(()));
        assert_eq!(effect, MarkAllEffect::ShowSuccessAndReload);

        // The reload the effect asks for goes through the normal guard.
        assert!(poller.begin_load(true));
        assert!(!poller.begin_load(true));
    }

    #[test]
    fn mark_all_failure_leaves_state_unchanged() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![notification("a", NotificationKind::Warning, None)],
            0,
            1,
        )));

        let effect = poller.complete_mark_all(Err(ApiError::Status(403)));

        assert_eq!(effect, MarkAllEffect::ShowError);
        assert_eq!(poller.notifications().len(), 1);
        assert_eq!(poller.badge_count(), 1);
        assert!(!poller.is_loading());
    }

    #[test]
    fn item_action_resolves_url_and_id() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![
                notification("a", NotificationKind::Danger, Some("/reports/expiry/")),
                notification("b", NotificationKind::Info, Some("#")),
            ],
            1,
            0,
        )));

        let action = poller.item_action("a").expect("item exists");
        assert_eq!(action.id, "a");
        assert_eq!(action.open_url.as_deref(), Some("/reports/expiry/"));

        // A placeholder URL marks read but opens nothing.
        let action = poller.item_action("b").expect("item exists");
        assert!(action.open_url.is_none());

        assert!(poller.item_action("missing").is_none());
    }

    #[test]
    fn singular_count_label() {
        let mut poller = Poller::new();
        poller.begin_load(false);
        poller.complete_load(Ok(response(
            vec![notification("a", NotificationKind::Info, None)],
            0,
            0,
        )));
        assert_eq!(poller.count_label(), "1 notificação");
    }
}
