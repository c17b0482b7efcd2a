//! Per-status task tallies shown in the dashboard header.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Tasks not yet started.
    pub pending: usize,
    /// Tasks underway.
    pub in_progress: usize,
    /// Finished tasks.
    pub completed: usize,
}

impl StatusCounts {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            match task.status() {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    /// Returns the count for a single status.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Returns the number of tasks counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}
