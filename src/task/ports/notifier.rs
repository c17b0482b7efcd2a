//! Notification port for user-facing task change summaries.

use crate::task::domain::{Task, TaskStatus};

/// A successful change to the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskNotice {
    /// A task was created.
    Created(Task),
    /// A task was edited.
    Updated(Task),
    /// A task moved to a new status.
    StatusChanged {
        /// Task after the change.
        task: Task,
        /// Status the task moved to.
        status: TaskStatus,
    },
    /// A task was deleted.
    Deleted(Task),
}

impl TaskNotice {
    /// Returns the task the notice is about.
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Created(task)
            | Self::Updated(task)
            | Self::StatusChanged { task, .. }
            | Self::Deleted(task) => task,
        }
    }

    /// Returns the short headline for the notice.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Created(_) => "Task created successfully!",
            Self::Updated(_) => "Task updated successfully!",
            Self::StatusChanged { .. } => "Task status updated!",
            Self::Deleted(_) => "Task deleted",
        }
    }

    /// Returns the one-sentence summary for the notice.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Created(task) => format!(
                "\"{}\" has been added with {} priority in {} category.",
                task.title(),
                task.priority(),
                task.category()
            ),
            Self::Updated(task) => format!("\"{}\" has been updated.", task.title()),
            Self::StatusChanged { task, status } => {
                format!("\"{}\" is now {}.", task.title(), status.label())
            }
            Self::Deleted(task) => format!("\"{}\" has been removed.", task.title()),
        }
    }

    /// Returns `true` for notices about irreversible removals.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

/// Fire-and-forget sink for task change notices.
///
/// Notifiers are informed only after a change has been applied; they cannot
/// veto or fail the operation.
pub trait TaskNotifier: Send + Sync {
    /// Receives a notice about a completed change.
    fn notify(&self, notice: &TaskNotice);
}
