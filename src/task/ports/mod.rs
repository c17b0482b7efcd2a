//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod repository;

pub use notifier::{TaskNotice, TaskNotifier};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
