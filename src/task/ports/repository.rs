//! Repository port for the ordered task collection.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task collection contract.
///
/// Implementations keep tasks in a single sequence. New tasks go to the front
/// so that [`TaskRepository::list_all`] yields the most recently created task
/// first; modifications happen in place without moving the task.
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn prepend(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Inserts a task at the back of the collection.
    ///
    /// Used to load a seed list in its given order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn append(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Runs `change` on the stored task with `id` in place and returns the
    /// result.
    ///
    /// The lookup and the write happen as one step, so a concurrent removal
    /// either precedes the change (yielding `None`) or follows it. Returns
    /// `None` without calling `change` when the task does not exist.
    fn modify(
        &self,
        id: TaskId,
        change: &mut dyn FnMut(&mut Task),
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task, returning it when it was present.
    fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task in collection order.
    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
