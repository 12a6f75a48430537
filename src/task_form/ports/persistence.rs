//! Persistence port invoked when a valid draft is submitted.

use crate::task_form::domain::TaskSubmission;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task persistence operations.
pub type TaskPersistenceResult<T> = Result<T, TaskPersistenceError>;

/// Contract supplied by the context that mounts the form.
#[async_trait]
pub trait TaskPersistence: Send + Sync {
    /// Persists a validated submission.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Rejected`] with a message suitable for
    /// the user, or [`TaskPersistenceError::Persistence`] when the underlying
    /// store fails.
    async fn persist(&self, submission: &TaskSubmission) -> TaskPersistenceResult<()>;
}

/// Errors returned by task persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskPersistenceError {
    /// The submission was refused with a human-readable reason.
    #[error("{0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskPersistenceError {
    /// Creates a rejection with a user-facing message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns the message to show the user, if the error carries one.
    ///
    /// Blank rejection messages yield `None` so callers can substitute a
    /// generic message.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            Self::Rejected(message) => message.trim().to_owned(),
            Self::Persistence(source) => source.to_string().trim().to_owned(),
        };
        (!message.is_empty()).then_some(message)
    }
}
