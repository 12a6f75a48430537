//! In-memory integration tests for create and edit form flows.

use std::sync::Arc;

use super::helpers::{TestPersistence, mount, notifier, persistence, submit_title};
use chrono::NaiveDate;
use rstest::rstest;
use taskform::task_form::{
    adapters::memory::RecordingNotifier,
    domain::{FormMode, InitialTaskValues, Priority, SelectorChange, TaskDraft, TaskField},
    ports::{Notification, TaskPersistenceError},
    services::{SubmitOutcome, TaskFormConfig, TaskFormOptions},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_form_can_enter_several_tasks_in_a_row(
    persistence: Arc<TestPersistence>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let controller = mount(&persistence, &notifier, TaskFormOptions::new());

    submit_title(&controller, "Buy milk").await?;
    submit_title(&controller, "  Call plumber ").await?;

    let titles: Vec<String> = persistence
        .tasks()?
        .into_iter()
        .map(|task| task.submission.title)
        .collect();
    eyre::ensure!(
        titles == vec!["Buy milk".to_owned(), "Call plumber".to_owned()],
        "unexpected stored titles {titles:?}"
    );
    eyre::ensure!(
        controller.snapshot().draft == TaskDraft::default(),
        "create form should be blank after saving"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_form_built_from_raw_values_round_trips_selectors(
    persistence: Arc<TestPersistence>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let initial = TaskDraft::try_from(InitialTaskValues {
        title: "Renew passport".to_owned(),
        description: "Photos first".to_owned(),
        category: Some("personal".to_owned()),
        priority: Some("HIGH".to_owned()),
        due_date: Some("2026-11-30".to_owned()),
    })?;
    let controller = mount(
        &persistence,
        &notifier,
        TaskFormOptions::new().with_initial(initial),
    );
    eyre::ensure!(controller.mode() == FormMode::Edit, "expected edit mode");

    let new_due = NaiveDate::from_ymd_opt(2026, 12, 5)
        .ok_or_else(|| eyre::eyre!("invalid test date"))?;
    controller.apply_selection(SelectorChange::DueDate(Some(new_due)));
    controller.apply_selection(SelectorChange::Priority(Priority::Urgent));

    let outcome = controller.submit().await;
    eyre::ensure!(
        outcome == SubmitOutcome::Saved { reset: false },
        "unexpected outcome {outcome:?}"
    );

    let stored = persistence.tasks()?;
    let task = stored
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    eyre::ensure!(task.submission.due_date == Some(new_due), "due date mismatch");
    eyre::ensure!(task.submission.priority == Priority::Urgent, "priority mismatch");
    eyre::ensure!(
        task.submission.category.as_deref() == Some("personal"),
        "category mismatch"
    );

    let values = controller.selector_values();
    eyre::ensure!(values.due_date == Some(new_due), "edit form should keep values");
    eyre::ensure!(
        notifier.last()
            == Some(Notification::Saved {
                mode: FormMode::Edit
            }),
        "expected an edit notification"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failure_then_fix_then_retry(
    persistence: Arc<TestPersistence>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let controller = mount(&persistence, &notifier, TaskFormOptions::new());
    controller.update_field(TaskField::Title, "t".repeat(201));

    let invalid = controller.submit().await;
    eyre::ensure!(
        matches!(invalid, SubmitOutcome::Invalid(_)),
        "expected invalid outcome, got {invalid:?}"
    );
    eyre::ensure!(notifier.sent().is_empty(), "validation must not notify");

    controller.update_field(TaskField::Title, "t".repeat(200));
    eyre::ensure!(
        controller.snapshot().errors.is_empty(),
        "editing should clear the title error"
    );

    persistence.fail_next(TaskPersistenceError::rejected("Try again later"))?;
    let failed = controller.submit().await;
    eyre::ensure!(
        failed
            == SubmitOutcome::Failed {
                message: "Try again later".to_owned()
            },
        "unexpected outcome {failed:?}"
    );
    eyre::ensure!(
        controller.snapshot().draft.title().len() == 200,
        "draft must survive a failed save"
    );

    let saved = controller.submit().await;
    eyre::ensure!(
        saved == SubmitOutcome::Saved { reset: true },
        "unexpected outcome {saved:?}"
    );
    eyre::ensure!(persistence.tasks()?.len() == 1, "expected one stored task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_fallback_message_is_used_for_blank_failures(
    persistence: Arc<TestPersistence>,
    notifier: Arc<RecordingNotifier>,
) -> Result<(), eyre::Report> {
    let config =
        TaskFormConfig::from_json_str(r#"{"fallback_error_message": "Saving is unavailable"}"#)?;
    let controller = mount(
        &persistence,
        &notifier,
        TaskFormOptions::new().with_config(config),
    );
    controller.update_field(TaskField::Title, "Anything");
    persistence.fail_next(TaskPersistenceError::rejected(""))?;

    let outcome = controller.submit().await;

    eyre::ensure!(
        outcome
            == SubmitOutcome::Failed {
                message: "Saving is unavailable".to_owned()
            },
        "unexpected outcome {outcome:?}"
    );
    Ok(())
}
