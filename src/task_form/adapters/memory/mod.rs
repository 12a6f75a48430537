//! In-memory adapters for tests and embedding.

mod notifier;
mod persistence;

pub use notifier::RecordingNotifier;
pub use persistence::{InMemoryTaskPersistence, PersistedTask};
