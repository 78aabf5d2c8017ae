//! Notification emitter.
//!
//! Holds the single notification currently on display and clears it after a
//! fixed window. What happens when a second notification arrives while the
//! first is still shown is governed by [`ExpiryPolicy`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::Notification;
use crate::port::Notifier;

/// Default display window for a notification.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

/// How expiry timers interact when notifications replace each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Each notification gets a full window; a replaced notification's timer
    /// no longer clears the display.
    #[default]
    Reset,
    /// Every notification's timer clears whatever is displayed when it fires,
    /// so an older timer can cut a newer notification short.
    Independent,
}

struct Slot {
    generation: u64,
    notification: Notification,
}

struct Inner {
    current: Mutex<Option<Slot>>,
    generation: AtomicU64,
    sink: Arc<dyn Notifier>,
    ttl: Duration,
    policy: ExpiryPolicy,
}

impl Inner {
    fn expire(&self, generation: u64) {
        let mut current = self.current.lock();
        let Some(slot) = current.as_ref() else {
            return;
        };
        if self.policy == ExpiryPolicy::Reset && slot.generation != generation {
            return;
        }
        debug!(generation, message = %slot.notification.message, "Notification expired");
        *current = None;
        self.sink.clear();
    }
}

/// Single-slot notification display with automatic expiry.
///
/// Cloning yields another handle onto the same slot.
#[derive(Clone)]
pub struct NotificationEmitter {
    inner: Arc<Inner>,
}

impl NotificationEmitter {
    /// Create an emitter with the default five second window.
    pub fn new(sink: Arc<dyn Notifier>) -> Self {
        Self::with_options(sink, NOTIFICATION_TTL, ExpiryPolicy::default())
    }

    pub fn with_options(sink: Arc<dyn Notifier>, ttl: Duration, policy: ExpiryPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: Mutex::new(None),
                generation: AtomicU64::new(0),
                sink,
                ttl,
                policy,
            }),
        }
    }

    /// Display `notification` and schedule its removal.
    ///
    /// Must be called from within a Tokio runtime for the expiry to be
    /// scheduled; outside one the notification stays until replaced.
    pub fn emit(&self, notification: Notification) {
        // Slot lock held so the generation, the sink and the slot agree.
        let generation = {
            let mut current = self.inner.current.lock();
            let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            info!(
                kind = %notification.kind,
                message = %notification.message,
                generation,
                "Notification"
            );
            self.inner.sink.show(&notification);
            *current = Some(Slot {
                generation,
                notification,
            });
            generation
        };

        let inner = Arc::clone(&self.inner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(inner.ttl).await;
                    inner.expire(generation);
                });
            }
            Err(e) => warn!(error = %e, "No runtime; notification will not expire"),
        }
    }

    /// Notification currently on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.inner
            .current
            .lock()
            .as_ref()
            .map(|slot| slot.notification.clone())
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NullNotifier;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn notification_clears_after_exactly_five_seconds() {
        let emitter = NotificationEmitter::new(Arc::new(NullNotifier));
        emitter.emit(Notification::success("done"));

        sleep_ms(4999).await;
        assert!(emitter.current().is_some());

        sleep_ms(1).await;
        assert!(emitter.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_policy_gives_replacement_a_full_window() {
        let emitter = NotificationEmitter::new(Arc::new(NullNotifier));
        emitter.emit(Notification::error("first"));
        sleep_ms(3000).await;
        emitter.emit(Notification::success("second"));

        // First timer fires at 5000 but must not clear the replacement.
        sleep_ms(2500).await;
        assert_eq!(emitter.current().unwrap().message, "second");

        sleep_ms(2500).await;
        assert!(emitter.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn independent_policy_lets_old_timer_clear_new_notification() {
        let emitter = NotificationEmitter::with_options(
            Arc::new(NullNotifier),
            NOTIFICATION_TTL,
            ExpiryPolicy::Independent,
        );
        emitter.emit(Notification::error("first"));
        sleep_ms(3000).await;
        emitter.emit(Notification::success("second"));

        sleep_ms(2500).await;
        assert!(emitter.current().is_none());
    }

    #[derive(Default)]
    struct LastShown {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for LastShown {
        fn show(&self, notification: &Notification) {
            self.messages.lock().push(notification.message.clone());
        }

        fn clear(&self) {}
    }

    #[test]
    fn concurrent_emits_leave_slot_matching_sink() {
        let sink = Arc::new(LastShown::default());
        let emitter = NotificationEmitter::new(sink.clone());

        std::thread::scope(|scope| {
            for thread in 0..8 {
                let emitter = emitter.clone();
                scope.spawn(move || {
                    for i in 0..100 {
                        emitter.emit(Notification::error(format!("{thread}-{i}")));
                    }
                });
            }
        });

        let messages = sink.messages.lock();
        assert_eq!(messages.len(), 800);
        let slot = emitter.inner.current.lock();
        let slot = slot.as_ref().unwrap();
        assert_eq!(slot.generation, 800);
        assert_eq!(Some(&slot.notification.message), messages.last());
    }

    #[test]
    fn emit_outside_runtime_keeps_notification() {
        let emitter = NotificationEmitter::new(Arc::new(NullNotifier));
        emitter.emit(Notification::error("sticky"));
        assert_eq!(emitter.current().unwrap().message, "sticky");
    }
}
