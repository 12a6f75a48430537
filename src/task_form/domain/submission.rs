//! Submission lifecycle state and the persisted payload.

use super::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// No submission is running; the form accepts input.
    #[default]
    Idle,
    /// A submission is awaiting persistence; the form is disabled.
    Submitting,
}

impl SubmissionState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
        }
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Validated task values handed to persistence.
///
/// The title is non-empty and both text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSubmission {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description, possibly empty.
    pub description: String,
    /// Selected category, if any.
    pub category: Option<String>,
    /// Selected priority.
    pub priority: Priority,
    /// Selected due date, if any.
    pub due_date: Option<NaiveDate>,
}
