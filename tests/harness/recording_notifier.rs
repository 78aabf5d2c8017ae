use std::sync::{Arc, Mutex};

use presale::domain::Notification;
use presale::port::Notifier;

/// Thread-safe notification collector for display assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
    clears: Arc<Mutex<usize>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().expect("lock notifications").clone()
    }

    pub fn len(&self) -> usize {
        self.shown.lock().expect("lock notifications").len()
    }

    pub fn clears(&self) -> usize {
        *self.clears.lock().expect("lock clears")
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: &Notification) {
        self.shown
            .lock()
            .expect("lock notifications")
            .push(notification.clone());
    }

    fn clear(&self) {
        *self.clears.lock().expect("lock clears") += 1;
    }
}
