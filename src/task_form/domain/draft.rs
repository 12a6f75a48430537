//! The in-progress task draft and its raw initial values.

use super::{Priority, TaskField, TaskFormDomainError, TaskSubmission};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task data held by the form while it is being edited.
///
/// Text fields are stored exactly as typed; trimming happens only when the
/// draft is turned into a [`TaskSubmission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    category: Option<String>,
    priority: Priority,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a blank draft with the default priority.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(Some(category.into()));
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description as typed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the value of a text field.
    #[must_use]
    pub fn text(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
        }
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the selected priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the selected due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Overwrites a text field.
    pub fn set_text(&mut self, field: TaskField, value: impl Into<String>) {
        let slot = match field {
            TaskField::Title => &mut self.title,
            TaskField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Sets or clears the category.
    ///
    /// An empty or whitespace-only category means no category.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|value| !value.trim().is_empty());
    }

    /// Sets the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Sets or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Builds the payload handed to persistence.
    #[must_use]
    pub fn to_submission(&self) -> TaskSubmission {
        TaskSubmission {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category.clone(),
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

/// Raw initial values supplied when a form is mounted.
///
/// Every field is optional and string-typed so the values can come straight
/// from a query string, a JSON document, or an existing task record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialTaskValues {
    /// Initial title.
    pub title: String,
    /// Initial description.
    pub description: String,
    /// Initial category.
    pub category: Option<String>,
    /// Initial priority name, such as `high`.
    pub priority: Option<String>,
    /// Initial due date as `YYYY-MM-DD`.
    pub due_date: Option<String>,
}

impl TryFrom<InitialTaskValues> for TaskDraft {
    type Error = TaskFormDomainError;

    fn try_from(values: InitialTaskValues) -> Result<Self, Self::Error> {
        let priority = match values.priority.as_deref() {
            Some(name) if !name.trim().is_empty() => Priority::try_from(name)?,
            _ => Priority::default(),
        };
        let due_date = values
            .due_date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| TaskFormDomainError::InvalidDueDate(raw.to_owned()))
            })
            .transpose()?;

        let mut draft = Self {
            title: values.title,
            description: values.description,
            category: None,
            priority,
            due_date,
        };
        draft.set_category(values.category);
        Ok(draft)
    }
}
