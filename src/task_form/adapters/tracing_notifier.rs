//! Notifier that reports submission outcomes as log events.

use crate::task_form::ports::{Notification, SubmissionNotifier};

/// Emits notifications through `tracing` for hosts without a toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl SubmissionNotifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Saved { mode } => {
                tracing::info!(mode = mode.as_str(), "{notification}");
            }
            Notification::Failed { message } => {
                tracing::warn!(error = %message, "task submission failed");
            }
        }
    }
}
