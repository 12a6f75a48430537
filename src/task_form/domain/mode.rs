//! Create and edit modes.

use serde::{Deserialize, Serialize};

/// Whether the form creates a new task or edits an existing one.
///
/// A successful create-mode submission clears the draft so the next task can
/// be entered; an edit-mode submission leaves it as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// The form starts blank and is cleared after each successful submit.
    Create,
    /// The form edits existing task values and keeps them after submit.
    Edit,
}

impl FormMode {
    /// Infers the mode from the initial text values.
    ///
    /// Only a form whose initial title and description are both empty is in
    /// create mode. Whitespace counts as content.
    #[must_use]
    pub const fn infer(initial_title: &str, initial_description: &str) -> Self {
        if initial_title.is_empty() && initial_description.is_empty() {
            Self::Create
        } else {
            Self::Edit
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }

    /// Returns whether a successful submission resets the draft.
    #[must_use]
    pub const fn resets_on_success(self) -> bool {
        matches!(self, Self::Create)
    }
}
