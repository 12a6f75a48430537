//! Application services for task form editing and submission.

mod config;
mod controller;

pub use config::{CancelHandler, TaskFormConfig, TaskFormConfigError, TaskFormOptions};
pub use controller::{FormSnapshot, SubmitOutcome, TaskFormController};
