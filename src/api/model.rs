// SPDX-License-Identifier: MPL-2.0
//! Wire types for the notifications API.
//!
//! Field names mirror the backend's JSON exactly; the client performs no
//! reshaping beyond deserialization. Notifications arrive pre-sorted by the
//! backend and are kept in arrival order throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity class of a notification, as reported by the backend.
///
/// Unknown classes fold into [`NotificationKind::Other`] so a backend
/// addition never breaks decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Danger,
    Warning,
    #[default]
    Info,
    Success,
    #[serde(other)]
    Other,
}

/// A single notification as fetched from the backend.
///
/// The read/unread flag is implicit: anything present in the fetched list
/// is unread. The client holds these only as a transient cached copy that
/// is replaced wholesale on the next successful load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Opaque backend identifier.
    pub id: String,
    /// Severity class (drives card accents and badge math).
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Backend icon reference (an icon font class name).
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Optional click-through target.
    #[serde(default)]
    pub action_url: Option<String>,
}

impl Notification {
    /// Whether the notification carries a usable click-through URL.
    ///
    /// The backend occasionally sends `"#"` as a placeholder; that counts
    /// as no target.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action_url
            .as_deref()
            .is_some_and(|url| !url.is_empty() && url != "#")
    }
}

/// Aggregate severity counts, derived by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationCounts {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub danger: u32,
    #[serde(default)]
    pub warning: u32,
    #[serde(default)]
    pub info: u32,
    #[serde(default)]
    pub success: u32,
}

impl NotificationCounts {
    /// The unread badge value: danger plus warning, nothing else.
    #[must_use]
    pub fn badge_total(&self) -> u32 {
        self.danger + self.warning
    }
}

/// Response body of `GET /api/notifications/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationsResponse {
    pub success: bool,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub counts: NotificationCounts,
}

/// Request body of `POST /api/notifications/mark-read/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MarkReadRequest {
    All { all: bool },
    One { notification_id: String },
}

impl MarkReadRequest {
    /// Marks every notification read.
    #[must_use]
    pub fn all() -> Self {
        MarkReadRequest::All { all: true }
    }

    /// Marks a single notification read.
    #[must_use]
    pub fn one(notification_id: impl Into<String>) -> Self {
        MarkReadRequest::One {
            notification_id: notification_id.into(),
        }
    }
}

/// Response body of the mark-read endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarkReadResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_payload() {
        let body = r#"{
            "success": true,
            "notifications": [{
                "id": "stock-42",
                "type": "danger",
                "icon": "fas fa-pills",
                "title": "Estoque baixo",
                "message": "Dipirona 500mg abaixo do mínimo",
                "timestamp": "2025-06-15T11:58:00Z",
                "action_url": "/inventory/stock/"
            }],
            "counts": {"total": 1, "danger": 1, "warning": 0}
        }"#;

        let decoded: NotificationsResponse =
            serde_json::from_str(body).expect("payload should decode");

        assert!(decoded.success);
        assert_eq!(decoded.notifications.len(), 1);
        let item = &decoded.notifications[0];
        assert_eq!(item.kind, NotificationKind::Danger);
        assert!(item.has_action());
        assert_eq!(decoded.counts.badge_total(), 1);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{
            "success": true,
            "notifications": [{
                "id": "n1",
                "type": "warning",
                "title": "Atenção",
                "message": "Lote próximo ao vencimento",
                "timestamp": "2025-06-15T09:00:00Z"
            }]
        }"#;

        let decoded: NotificationsResponse =
            serde_json::from_str(body).expect("payload should decode");

        let item = &decoded.notifications[0];
        assert!(item.icon.is_empty());
        assert!(item.action_url.is_none());
        assert!(!item.has_action());
        assert_eq!(decoded.counts, NotificationCounts::default());
    }

    #[test]
    fn unknown_kind_folds_into_other() {
        let body = r#"{
            "success": true,
            "notifications": [{
                "id": "n2",
                "type": "celebration",
                "title": "t",
                "message": "m",
                "timestamp": "2025-06-15T09:00:00Z"
            }]
        }"#;

        let decoded: NotificationsResponse =
            serde_json::from_str(body).expect("payload should decode");
        assert_eq!(decoded.notifications[0].kind, NotificationKind::Other);
    }

    #[test]
    fn placeholder_action_url_is_not_an_action() {
        let notification = Notification {
            id: "n3".into(),
            kind: NotificationKind::Info,
            icon: String::new(),
            title: "t".into(),
            message: "m".into(),
            timestamp: Utc::now(),
            action_url: Some("#".into()),
        };
        assert!(!notification.has_action());
    }

    #[test]
    fn mark_read_bodies_serialize_to_backend_shapes() {
        let all = serde_json::to_value(MarkReadRequest::all()).expect("serializes");
        assert_eq!(all, serde_json::json!({"all": true}));

        let one = serde_json::to_value(MarkReadRequest::one("n7")).expect("serializes");
        assert_eq!(one, serde_json::json!({"notification_id": "n7"}));
    }

    #[test]
    fn badge_total_ignores_info_and_success() {
        let counts = NotificationCounts {
            total: 10,
            danger: 2,
            warning: 3,
            info: 4,
            success: 1,
        };
        assert_eq!(counts.badge_total(), 5);
    }
}
