//! Adapters for the task ports.
//!
//! - [`memory::InMemoryTaskRepository`]: ordered in-memory task collection
//! - [`memory::InMemoryTaskNotifier`]: notifier that records notices
//! - [`logging::TracingTaskNotifier`]: notifier that emits `tracing` events

pub mod logging;
pub mod memory;
