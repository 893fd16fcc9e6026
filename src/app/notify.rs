//! Transient notifications (toasts)

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MESSAGE_SET: &str = "Message set successfully!";
pub const MESSAGE_RETRIEVED: &str = "Message retrieved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub timestamp: DateTime<Utc>,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for notifications; the form never waits on it.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        println!(
            "[{} {}] {}",
            notification.timestamp.format("%H:%M:%S"),
            marker,
            notification.message
        );
    }
}
