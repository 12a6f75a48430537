//! Error types for task form domain parsing.

use thiserror::Error;

/// Errors returned while building a draft from raw initial values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFormDomainError {
    /// The initial priority is not one of the supported priorities.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// The initial due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing a priority from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing an editable field name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task field: {0}")]
pub struct ParseTaskFieldError(pub String);
