//! Notifier port for user-facing notifications.
//!
//! The application decides what to show and for how long; a notifier only
//! renders it.

use crate::domain::Notification;

/// Sink that renders notifications.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `show` and `clear` are called from async contexts and must not block
pub trait Notifier: Send + Sync {
    /// Display `notification`, replacing whatever is currently shown.
    fn show(&self, notification: &Notification);

    /// Remove the currently displayed notification.
    fn clear(&self);
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn show(&self, _notification: &Notification) {}

    fn clear(&self) {}
}
