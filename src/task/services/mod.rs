//! Application services for task management.

mod config;
mod seed;
mod store;

pub use config::TaskStoreConfig;
pub use seed::demo_tasks;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
