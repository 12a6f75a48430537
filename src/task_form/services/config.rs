//! Configuration and construction options for task forms.

use crate::task_form::domain::{FormMode, TaskDraft, ValidationLimits};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const DEFAULT_FALLBACK_ERROR_MESSAGE: &str = "Failed to save task";
const DEFAULT_CREATE_LABEL: &str = "Create Task";
const DEFAULT_EDIT_LABEL: &str = "Update Task";

/// Shared settings for task forms.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single setting.
///
/// # Examples
///
/// ```
/// use taskform::task_form::services::TaskFormConfig;
///
/// let config = TaskFormConfig::from_json_str(r#"{"limits": {"max_title_chars": 80}}"#)
///     .expect("valid config");
/// assert_eq!(config.limits.max_title_chars.get(), 80);
/// assert_eq!(config.limits.max_description_chars, 1000);
/// assert_eq!(config.fallback_error_message, "Failed to save task");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFormConfig {
    /// Text field limits.
    pub limits: ValidationLimits,
    /// Message shown when a failed submission carries no message of its own.
    pub fallback_error_message: String,
    /// Submit button label in create mode.
    pub create_label: String,
    /// Submit button label in edit mode.
    pub edit_label: String,
}

impl Default for TaskFormConfig {
    fn default() -> Self {
        Self {
            limits: ValidationLimits::default(),
            fallback_error_message: DEFAULT_FALLBACK_ERROR_MESSAGE.to_owned(),
            create_label: DEFAULT_CREATE_LABEL.to_owned(),
            edit_label: DEFAULT_EDIT_LABEL.to_owned(),
        }
    }
}

impl TaskFormConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFormConfigError::Parse`] when the document is malformed
    /// or sets a zero title limit.
    pub fn from_json_str(json: &str) -> Result<Self, TaskFormConfigError> {
        serde_json::from_str(json).map_err(|err| TaskFormConfigError::Parse(err.to_string()))
    }

    /// Returns the default submit label for a mode.
    #[must_use]
    pub fn label_for(&self, mode: FormMode) -> &str {
        match mode {
            FormMode::Create => &self.create_label,
            FormMode::Edit => &self.edit_label,
        }
    }
}

/// Errors returned while loading a [`TaskFormConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFormConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid task form configuration: {0}")]
    Parse(String),
}

/// Handler run when the user cancels the form.
pub type CancelHandler = Box<dyn Fn() + Send + Sync>;

/// Values supplied when a form is mounted.
pub struct TaskFormOptions {
    pub(crate) initial: TaskDraft,
    pub(crate) mode: Option<FormMode>,
    pub(crate) submit_label: Option<String>,
    pub(crate) on_cancel: Option<CancelHandler>,
    pub(crate) config: TaskFormConfig,
}

impl TaskFormOptions {
    /// Creates options for a blank form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial: TaskDraft::default(),
            mode: None,
            submit_label: None,
            on_cancel: None,
            config: TaskFormConfig::default(),
        }
    }

    /// Sets the initial draft.
    #[must_use]
    pub fn with_initial(mut self, initial: TaskDraft) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the mode explicitly instead of inferring it from the initial
    /// text fields.
    #[must_use]
    pub const fn with_mode(mut self, mode: FormMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Overrides the submit button label.
    #[must_use]
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }

    /// Sets the handler run on cancel.
    #[must_use]
    pub fn with_cancel_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    /// Replaces the shared configuration.
    #[must_use]
    pub fn with_config(mut self, config: TaskFormConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for TaskFormOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskFormOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFormOptions")
            .field("initial", &self.initial)
            .field("mode", &self.mode)
            .field("submit_label", &self.submit_label)
            .field("on_cancel", &self.on_cancel.is_some())
            .field("config", &self.config)
            .finish()
    }
}
