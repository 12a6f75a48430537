//! Persistence adapter backed by a caller-supplied async closure.

use crate::task_form::{
    domain::TaskSubmission,
    ports::{TaskPersistence, TaskPersistenceResult},
};
use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;

/// Adapts an async closure to [`TaskPersistence`].
///
/// # Examples
///
/// ```
/// use taskform::task_form::adapters::CallbackPersistence;
/// use taskform::task_form::ports::TaskPersistenceError;
///
/// let persistence = CallbackPersistence::new(|submission| async move {
///     if submission.title == "duplicate" {
///         return Err(TaskPersistenceError::rejected("Task already exists"));
///     }
///     Ok(())
/// });
/// # let _ = persistence;
/// ```
pub struct CallbackPersistence<F, Fut> {
    callback: F,
    _future: PhantomData<fn() -> Fut>,
}

impl<F, Fut> CallbackPersistence<F, Fut>
where
    F: Fn(TaskSubmission) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = TaskPersistenceResult<()>> + Send + 'static,
{
    /// Wraps a persistence callback.
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self {
            callback,
            _future: PhantomData,
        }
    }
}

#[async_trait]
impl<F, Fut> TaskPersistence for CallbackPersistence<F, Fut>
where
    F: Fn(TaskSubmission) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = TaskPersistenceResult<()>> + Send + 'static,
{
    async fn persist(&self, submission: &TaskSubmission) -> TaskPersistenceResult<()> {
        (self.callback)(submission.clone()).await
    }
}
