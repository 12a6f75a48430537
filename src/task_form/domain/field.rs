//! Free-text fields edited directly by the user.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text field of the draft that carries validation rules.
///
/// Category, priority, and due date are owned by selector collaborators and
/// are never invalid, so they have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task description.
    Description,
}

impl TaskField {
    /// Returns the field name used by form inputs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

impl TryFrom<&str> for TaskField {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            _ => Err(ParseTaskFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
