//! Domain model for task management.
//!
//! The task domain holds the task aggregate, its closed attribute sets, the
//! keyword classifier used when drafting new tasks, and the filter applied to
//! task lists. It has no knowledge of storage or presentation.

mod attributes;
mod classifier;
mod counts;
mod draft;
mod error;
mod filter;
mod ids;
mod task;

pub use attributes::{TaskCategory, TaskPriority, TaskStatus};
pub use classifier::{Classification, classify};
pub use counts::StatusCounts;
pub use draft::{TaskChanges, TaskDraft};
pub use error::{
    ParseTaskCategoryError, ParseTaskIdError, ParseTaskPriorityError, ParseTaskStatusError,
    TaskDomainError,
};
pub use filter::{FilterSelection, TaskFilter, filter_tasks};
pub use ids::{TaskId, TaskTitle};
pub use task::{Task, TaskRecord};
