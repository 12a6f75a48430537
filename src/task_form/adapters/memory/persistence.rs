//! In-memory persistence for task submissions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::task_form::{
    domain::{TaskId, TaskSubmission},
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};

/// A submission accepted by [`InMemoryTaskPersistence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTask {
    /// Identifier assigned on storage.
    pub id: TaskId,
    /// The stored submission.
    pub submission: TaskSubmission,
    /// When the submission was stored.
    pub persisted_at: DateTime<Utc>,
}

/// Thread-safe in-memory task persistence.
///
/// Failures can be queued with [`InMemoryTaskPersistence::fail_next`]; each
/// queued failure is returned by exactly one subsequent call.
#[derive(Debug)]
pub struct InMemoryTaskPersistence<C: Clock> {
    clock: Arc<C>,
    state: Arc<RwLock<InMemoryPersistenceState>>,
}

#[derive(Debug, Default)]
struct InMemoryPersistenceState {
    tasks: Vec<PersistedTask>,
    pending_failures: VecDeque<TaskPersistenceError>,
}

impl<C: Clock> Clone for InMemoryTaskPersistence<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: Clock> InMemoryTaskPersistence<C> {
    /// Creates an empty store using the given clock for timestamps.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::default(),
        }
    }

    /// Queues a failure for the next persistence call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] when the store lock is
    /// poisoned.
    pub fn fail_next(&self, error: TaskPersistenceError) -> TaskPersistenceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.pending_failures.push_back(error);
        Ok(())
    }

    /// Returns every stored task in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Persistence`] when the store lock is
    /// poisoned.
    pub fn tasks(&self) -> TaskPersistenceResult<Vec<PersistedTask>> {
        let state = self.state.read().map_err(|err| {
            TaskPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }
}

#[async_trait]
impl<C> TaskPersistence for InMemoryTaskPersistence<C>
where
    C: Clock + Send + Sync,
{
    async fn persist(&self, submission: &TaskSubmission) -> TaskPersistenceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if let Some(failure) = state.pending_failures.pop_front() {
            return Err(failure);
        }
        state.tasks.push(PersistedTask {
            id: TaskId::new(),
            submission: submission.clone(),
            persisted_at: self.clock.utc(),
        });
        Ok(())
    }
}
