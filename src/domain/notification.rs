//! User-facing workflow outcome notifications.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A terminal outcome shown to the user for a limited time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        let err = Notification::error("Wallet not connected");
        assert!(err.is_error());
        assert_eq!(err.message, "Wallet not connected");
    }

    #[test]
    fn serialized_notification_carries_timestamp() {
        let notification = Notification::error("Wallet not connected");
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Wallet not connected");
        let stamp = json["created_at"].as_str().unwrap();
        let parsed: DateTime<Utc> = stamp.parse().unwrap();
        assert_eq!(parsed, notification.created_at);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Error).unwrap();
        assert_eq!(json, "\"error\"");
    }
}
