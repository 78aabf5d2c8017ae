//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the available display backends.

use tracing::{debug, info, warn};

use crate::adapter::inbound::cli::output;
use crate::domain::{Notification, NotificationKind};
use crate::port::Notifier;

/// A logging notifier that renders notifications via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => {
                info!(message = %notification.message, "Success notification");
            }
            NotificationKind::Error => {
                warn!(message = %notification.message, "Error notification");
            }
        }
    }

    fn clear(&self) {
        debug!("Notification cleared");
    }
}

/// Renders notifications as status lines on the terminal, or as
/// `notification` records (kind, message, created_at) in JSON mode.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, notification: &Notification) {
        if output::is_json() {
            output::record("notification", notification);
            return;
        }
        match notification.kind {
            NotificationKind::Success => output::success(&notification.message),
            NotificationKind::Error => output::error(&notification.message),
        }
    }

    fn clear(&self) {}
}
