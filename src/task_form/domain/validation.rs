//! Field validation rules for task drafts.
//!
//! Each rule is a pure function over a single field. [`validate_draft`] runs
//! every rule and collects the failures into a [`ValidationErrors`] map keyed
//! by field, which the form shows next to the matching input.

use super::{TaskDraft, TaskField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use thiserror::Error;

const DEFAULT_MAX_TITLE_CHARS: usize = 200;

/// Length limits applied to the text fields, counted in characters.
///
/// The title limit is never zero, so a configured form always accepts some
/// title.
///
/// # Examples
///
/// ```
/// use taskform::task_form::domain::ValidationLimits;
///
/// let limits = ValidationLimits::default();
/// assert_eq!(limits.max_title_chars.get(), 200);
/// assert_eq!(limits.max_description_chars, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Longest accepted title.
    pub max_title_chars: NonZeroUsize,
    /// Longest accepted description.
    pub max_description_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_chars: NonZeroUsize::new(DEFAULT_MAX_TITLE_CHARS)
                .unwrap_or(NonZeroUsize::MIN),
            max_description_chars: 1000,
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// The title is longer than the limit.
    #[error("Title must be {max} characters or less")]
    TitleTooLong {
        /// Configured limit.
        max: usize,
        /// Length of the rejected title.
        actual: usize,
    },

    /// The description is longer than the limit.
    #[error("Description must be {max} characters or less")]
    DescriptionTooLong {
        /// Configured limit.
        max: usize,
        /// Length of the rejected description.
        actual: usize,
    },
}

/// Field-keyed validation failures.
///
/// Entries are replaced wholesale by each validation run and removed one at a
/// time as the user edits the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<TaskField, FieldError>);

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: TaskField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Returns the error recorded for a field.
    #[must_use]
    pub fn get(&self, field: TaskField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Returns the message to display for a field.
    #[must_use]
    pub fn message(&self, field: TaskField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Removes the error for a field, returning whether one was present.
    pub fn clear(&mut self, field: TaskField) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Returns whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Validates a title.
///
/// # Errors
///
/// Returns [`FieldError::TitleRequired`] when the title is blank, or
/// [`FieldError::TitleTooLong`] when it exceeds the limit.
pub fn validate_title(title: &str, limits: &ValidationLimits) -> Result<(), FieldError> {
    if title.trim().is_empty() {
        return Err(FieldError::TitleRequired);
    }
    let actual = title.chars().count();
    let max = limits.max_title_chars.get();
    if actual > max {
        return Err(FieldError::TitleTooLong {
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates a description. An empty description is valid.
///
/// # Errors
///
/// Returns [`FieldError::DescriptionTooLong`] when the description exceeds
/// the limit.
pub fn validate_description(
    description: &str,
    limits: &ValidationLimits,
) -> Result<(), FieldError> {
    let actual = description.chars().count();
    if actual > limits.max_description_chars {
        return Err(FieldError::DescriptionTooLong {
            max: limits.max_description_chars,
            actual,
        });
    }
    Ok(())
}

/// Runs every field rule over a draft and collects the failures.
#[must_use]
pub fn validate_draft(draft: &TaskDraft, limits: &ValidationLimits) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Err(error) = validate_title(draft.title(), limits) {
        errors.insert(TaskField::Title, error);
    }
    if let Err(error) = validate_description(draft.description(), limits) {
        errors.insert(TaskField::Description, error);
    }
    errors
}
