//! Shared test helpers for in-memory task form integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskform::task_form::{
    adapters::memory::{InMemoryTaskPersistence, RecordingNotifier},
    domain::TaskField,
    services::{SubmitOutcome, TaskFormController, TaskFormOptions},
};

/// Persistence type used by the in-memory tests.
pub type TestPersistence = InMemoryTaskPersistence<DefaultClock>;

/// Controller type used by the in-memory tests.
pub type TestController = TaskFormController<TestPersistence, RecordingNotifier>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn persistence() -> Arc<TestPersistence> {
    Arc::new(InMemoryTaskPersistence::new(Arc::new(DefaultClock)))
}

/// Provides a fresh notification recorder for each test.
#[fixture]
pub fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::new())
}

/// Mounts a form against the shared store and notifier.
pub fn mount(
    persistence: &Arc<TestPersistence>,
    notifier: &Arc<RecordingNotifier>,
    options: TaskFormOptions,
) -> TestController {
    TaskFormController::new(Arc::clone(persistence), Arc::clone(notifier), options)
}

/// Types a title and submits the form.
///
/// # Errors
///
/// Returns an error if the submission is not saved.
pub async fn submit_title(controller: &TestController, title: &str) -> Result<(), eyre::Report> {
    controller.update_field(TaskField::Title, title);
    match controller.submit().await {
        SubmitOutcome::Saved { .. } => Ok(()),
        other => Err(eyre::eyre!("expected saved submission, got {other:?}")),
    }
}
