//! Notifier that keeps every notification for later inspection.

use std::sync::{Arc, PoisonError, RwLock};

use crate::task_form::ports::{Notification, SubmissionNotifier};

/// Records notifications in the order they were sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl SubmissionNotifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}
