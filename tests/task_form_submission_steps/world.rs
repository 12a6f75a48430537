//! Shared world state for task form submission BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskform::task_form::{
    adapters::memory::{InMemoryTaskPersistence, RecordingNotifier},
    services::{SubmitOutcome, TaskFormController, TaskFormOptions},
};

/// Persistence type used by the BDD world.
pub type TestPersistence = InMemoryTaskPersistence<DefaultClock>;

/// Controller type used by the BDD world.
pub type TestController = TaskFormController<TestPersistence, RecordingNotifier>;

/// Scenario world for task form behaviour tests.
pub struct TaskFormWorld {
    /// Store shared with every form mounted in the scenario.
    pub persistence: Arc<TestPersistence>,
    /// Notification surface shared with every form.
    pub notifier: Arc<RecordingNotifier>,
    /// The mounted form, once a `Given` step has created it.
    pub controller: Option<TestController>,
    /// Outcome of the last submit.
    pub last_outcome: Option<SubmitOutcome>,
}

impl TaskFormWorld {
    /// Creates a world with no mounted form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            persistence: Arc::new(InMemoryTaskPersistence::new(Arc::new(DefaultClock))),
            notifier: Arc::new(RecordingNotifier::new()),
            controller: None,
            last_outcome: None,
        }
    }

    /// Mounts a form with the given options.
    pub fn mount(&mut self, options: TaskFormOptions) {
        self.controller = Some(TaskFormController::new(
            Arc::clone(&self.persistence),
            Arc::clone(&self.notifier),
            options,
        ));
    }

    /// Returns the mounted form.
    ///
    /// # Errors
    ///
    /// Returns an error when no form has been mounted yet.
    pub fn controller(&self) -> Result<&TestController, eyre::Report> {
        self.controller
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing mounted form in scenario world"))
    }
}

impl Default for TaskFormWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskFormWorld {
    TaskFormWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
