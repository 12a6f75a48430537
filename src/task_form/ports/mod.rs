//! Port contracts for task form submission.
//!
//! Ports define the infrastructure-agnostic interfaces the form controller
//! talks to: where a submission is persisted and how its outcome is shown.

pub mod notifier;
pub mod persistence;

pub use notifier::{Notification, SubmissionNotifier};
pub use persistence::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult};
