//! In-memory adapter implementations.

mod notifier;
mod task;

pub use notifier::InMemoryTaskNotifier;
pub use task::InMemoryTaskRepository;
