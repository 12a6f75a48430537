//! Values exchanged with the category, priority, and due-date selectors.

use super::Priority;
use chrono::NaiveDate;

/// A change reported by one of the selector collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorChange {
    /// The category selector picked a category, or cleared it.
    Category(Option<String>),
    /// The priority selector picked a priority.
    Priority(Priority),
    /// The date picker picked a due date, or cleared it.
    DueDate(Option<NaiveDate>),
}

/// Current values displayed by the selector collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorValues {
    /// Value shown by the category selector.
    pub category: Option<String>,
    /// Value shown by the priority selector.
    pub priority: Priority,
    /// Value shown by the date picker.
    pub due_date: Option<NaiveDate>,
}
