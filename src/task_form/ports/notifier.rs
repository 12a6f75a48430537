//! Side-channel notifications about submission outcomes.

use crate::task_form::domain::FormMode;
use std::fmt;

/// Outcome of a submission, as announced outside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The submission was persisted.
    Saved {
        /// Mode the form was in when it submitted.
        mode: FormMode,
    },
    /// The submission failed.
    Failed {
        /// Message shown to the user.
        message: String,
    },
}

impl Notification {
    /// Returns whether the notification reports a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved {
                mode: FormMode::Create,
            } => f.write_str("Task created"),
            Self::Saved {
                mode: FormMode::Edit,
            } => f.write_str("Task updated"),
            Self::Failed { message } => f.write_str(message),
        }
    }
}

/// Transient notification surface, such as a toast.
pub trait SubmissionNotifier: Send + Sync {
    /// Announces a submission outcome.
    fn notify(&self, notification: &Notification);
}
