//! Domain model for task form drafting.
//!
//! The domain holds the draft being edited, the validation rules applied to
//! it, and the submission payload handed to persistence. Nothing here knows
//! how a submission is stored or how failures are shown to the user.

mod draft;
mod error;
mod field;
mod ids;
mod mode;
mod priority;
mod selector;
mod submission;
mod validation;

pub use draft::{InitialTaskValues, TaskDraft};
pub use error::{ParsePriorityError, ParseTaskFieldError, TaskFormDomainError};
pub use field::TaskField;
pub use ids::TaskId;
pub use mode::FormMode;
pub use priority::Priority;
pub use selector::{SelectorChange, SelectorValues};
pub use submission::{SubmissionState, TaskSubmission};
pub use validation::{
    FieldError, ValidationErrors, ValidationLimits, validate_description, validate_draft,
    validate_title,
};
