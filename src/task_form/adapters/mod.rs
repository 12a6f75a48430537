//! Adapter implementations for the task form ports.

pub mod callback;
pub mod memory;
pub mod tracing_notifier;

pub use callback::CallbackPersistence;
pub use tracing_notifier::TracingNotifier;
