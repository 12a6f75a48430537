//! Controller that owns a task draft and drives its submission.

use crate::task_form::{
    domain::{
        FormMode, ParseTaskFieldError, Priority, SelectorChange, SelectorValues, SubmissionState,
        TaskDraft, TaskField, TaskSubmission, ValidationErrors, validate_draft,
    },
    ports::{Notification, SubmissionNotifier, TaskPersistence},
};
use chrono::NaiveDate;
use futures_util::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CancelHandler, TaskFormConfig, TaskFormOptions};

/// Result of a call to [`TaskFormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; persistence was not called.
    Invalid(ValidationErrors),
    /// Another submission was already in flight; nothing happened.
    Busy,
    /// The submission was persisted.
    Saved {
        /// Whether the draft was cleared afterwards.
        reset: bool,
    },
    /// Persistence failed; the draft was kept for a retry.
    Failed {
        /// Message shown to the user.
        message: String,
    },
}

/// Everything a view needs to render the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Current draft values.
    pub draft: TaskDraft,
    /// Field errors from the last validation, minus fields edited since.
    pub errors: ValidationErrors,
    /// Submission lifecycle state.
    pub submission: SubmissionState,
    /// Message from the most recent failed submission.
    pub last_error: Option<String>,
}

impl FormSnapshot {
    /// Returns whether inputs and buttons should be disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.submission.is_submitting()
    }
}

#[derive(Debug, Default)]
struct FormState {
    draft: TaskDraft,
    errors: ValidationErrors,
    submission: SubmissionState,
    last_error: Option<String>,
}

/// Owns a task draft, validates it, and submits it through a
/// [`TaskPersistence`] port.
///
/// All operations take `&self`, so a controller can be shared while a
/// submission is awaiting persistence. Input received during that window is
/// dropped, and a second submit is a no-op.
pub struct TaskFormController<P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    persistence: Arc<P>,
    notifier: Arc<N>,
    mode: FormMode,
    submit_label: String,
    config: TaskFormConfig,
    on_cancel: Option<CancelHandler>,
    state: Mutex<FormState>,
}

impl<P, N> TaskFormController<P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    /// Mounts a form with the given options.
    ///
    /// When no mode is given, the form is in create mode only if both the
    /// initial title and description are empty.
    #[must_use]
    pub fn new(persistence: Arc<P>, notifier: Arc<N>, options: TaskFormOptions) -> Self {
        let TaskFormOptions {
            initial,
            mode,
            submit_label,
            on_cancel,
            config,
        } = options;
        let form_mode =
            mode.unwrap_or_else(|| FormMode::infer(initial.title(), initial.description()));
        let label = submit_label.unwrap_or_else(|| config.label_for(form_mode).to_owned());

        Self {
            persistence,
            notifier,
            mode: form_mode,
            submit_label: label,
            config,
            on_cancel,
            state: Mutex::new(FormState {
                draft: initial,
                ..FormState::default()
            }),
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the submit button label.
    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Returns the current render state.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock_state();
        FormSnapshot {
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            submission: state.submission,
            last_error: state.last_error.clone(),
        }
    }

    /// Returns the values the selector collaborators should display.
    #[must_use]
    pub fn selector_values(&self) -> SelectorValues {
        let state = self.lock_state();
        SelectorValues {
            category: state.draft.category().map(str::to_owned),
            priority: state.draft.priority(),
            due_date: state.draft.due_date(),
        }
    }

    /// Overwrites a text field and clears any error recorded for it.
    ///
    /// The field is not revalidated until the next submit.
    pub fn update_field(&self, field: TaskField, value: impl Into<String>) {
        self.edit("update_field", |state| {
            state.draft.set_text(field, value);
            state.errors.clear(field);
        });
    }

    /// Overwrites a text field identified by its input name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskFieldError`] when the name is not a text field.
    pub fn update_field_named(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ParseTaskFieldError> {
        let field = TaskField::try_from(name)?;
        self.update_field(field, value);
        Ok(())
    }

    /// Sets or clears the category.
    pub fn set_category(&self, category: Option<String>) {
        self.edit("set_category", |state| state.draft.set_category(category));
    }

    /// Sets the priority.
    pub fn set_priority(&self, priority: Priority) {
        self.edit("set_priority", |state| state.draft.set_priority(priority));
    }

    /// Sets or clears the due date.
    pub fn set_due_date(&self, due_date: Option<NaiveDate>) {
        self.edit("set_due_date", |state| state.draft.set_due_date(due_date));
    }

    /// Applies a change reported by a selector collaborator.
    pub fn apply_selection(&self, change: SelectorChange) {
        match change {
            SelectorChange::Category(category) => self.set_category(category),
            SelectorChange::Priority(priority) => self.set_priority(priority),
            SelectorChange::DueDate(due_date) => self.set_due_date(due_date),
        }
    }

    /// Validates the draft and records the resulting errors.
    ///
    /// Previously recorded errors are replaced, not merged. Returns `true`
    /// when no field has an error.
    pub fn validate(&self) -> bool {
        let mut state = self.lock_state();
        state.errors = validate_draft(&state.draft, &self.config.limits);
        state.errors.is_empty()
    }

    /// Validates and submits the draft.
    ///
    /// Failures never escape: a rejected or panicking persistence call is
    /// reported through the returned outcome, `last_error`, and the
    /// notifier. The form is back to idle on every exit path.
    ///
    /// Dropping this future while persistence is pending leaves the save's
    /// fate unknown. It is recorded as a failure with the fallback message
    /// and notified, and the draft is kept.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = match self.begin_submission() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };
        let mut guard = SubmissionGuard::new(self);

        let result = AssertUnwindSafe(self.persistence.persist(&submission))
            .catch_unwind()
            .await;
        guard.settle();
        match result {
            Ok(Ok(())) => self.finish_saved(),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, mode = self.mode.as_str(), "task persistence failed");
                let message = err
                    .user_message()
                    .unwrap_or_else(|| self.config.fallback_error_message.clone());
                self.finish_failed(message)
            }
            Err(_) => {
                tracing::warn!(mode = self.mode.as_str(), "task persistence panicked");
                self.finish_failed(self.config.fallback_error_message.clone())
            }
        }
    }

    /// Runs the cancel handler, if one was supplied.
    ///
    /// Returns `false` when there is no handler or a submission is in
    /// flight.
    pub fn cancel(&self) -> bool {
        if self.lock_state().submission.is_submitting() {
            tracing::debug!("cancel ignored while submitting");
            return false;
        }
        self.on_cancel.as_ref().is_some_and(|handler| {
            handler();
            true
        })
    }

    fn begin_submission(&self) -> Result<TaskSubmission, SubmitOutcome> {
        let mut state = self.lock_state();
        if state.submission.is_submitting() {
            tracing::debug!("submit ignored, submission already in flight");
            return Err(SubmitOutcome::Busy);
        }

        state.errors = validate_draft(&state.draft, &self.config.limits);
        if !state.errors.is_empty() {
            tracing::debug!(errors = state.errors.len(), "task draft failed validation");
            return Err(SubmitOutcome::Invalid(state.errors.clone()));
        }

        state.submission = SubmissionState::Submitting;
        state.last_error = None;
        Ok(state.draft.to_submission())
    }

    fn finish_saved(&self) -> SubmitOutcome {
        let reset = self.mode.resets_on_success();
        if reset {
            let mut state = self.lock_state();
            state.draft = TaskDraft::default();
            state.errors = ValidationErrors::new();
        }
        tracing::info!(mode = self.mode.as_str(), reset, "task submission persisted");
        self.notifier.notify(&Notification::Saved { mode: self.mode });
        SubmitOutcome::Saved { reset }
    }

    fn finish_failed(&self, message: String) -> SubmitOutcome {
        self.lock_state().last_error = Some(message.clone());
        self.notifier.notify(&Notification::Failed {
            message: message.clone(),
        });
        SubmitOutcome::Failed { message }
    }

    fn edit(&self, operation: &'static str, apply: impl FnOnce(&mut FormState)) {
        let mut state = self.lock_state();
        if state.submission.is_submitting() {
            tracing::debug!(operation, "input ignored while submitting");
            return;
        }
        apply(&mut *state);
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P, N> fmt::Debug for TaskFormController<P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFormController")
            .field("mode", &self.mode)
            .field("submit_label", &self.submit_label)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Returns the form to idle when a submission ends, however it ends.
///
/// A guard dropped before [`SubmissionGuard::settle`] means the submit future
/// was abandoned while persistence was pending.
struct SubmissionGuard<'a, P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    controller: &'a TaskFormController<P, N>,
    settled: bool,
}

impl<'a, P, N> SubmissionGuard<'a, P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    const fn new(controller: &'a TaskFormController<P, N>) -> Self {
        Self {
            controller,
            settled: false,
        }
    }

    const fn settle(&mut self) {
        self.settled = true;
    }
}

impl<P, N> Drop for SubmissionGuard<'_, P, N>
where
    P: TaskPersistence,
    N: SubmissionNotifier,
{
    fn drop(&mut self) {
        let controller = self.controller;
        if !self.settled {
            tracing::warn!(
                mode = controller.mode.as_str(),
                "task submission abandoned before persistence finished"
            );
            controller.finish_failed(controller.config.fallback_error_message.clone());
        }
        controller.lock_state().submission = SubmissionState::Idle;
    }
}
