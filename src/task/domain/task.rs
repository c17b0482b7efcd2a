//! Task aggregate root.

use super::{TaskCategory, TaskChanges, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Deserialization goes through [`Task::from_record`], so a decoded task
/// never reports an `updated_at` earlier than its `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TaskWire")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    category: TaskCategory,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task from a seed list or snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: TaskId,
    /// Task field values.
    pub draft: TaskDraft,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp. Clamped to `created_at` when earlier.
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskWire {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    category: TaskCategory,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskWire> for Task {
    fn from(wire: TaskWire) -> Self {
        Self::from_record(TaskRecord {
            id: wire.id,
            draft: TaskDraft::new(wire.title)
                .with_description(wire.description)
                .with_status(wire.status)
                .with_priority(wire.priority)
                .with_category(wire.category),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self::from_record(TaskRecord {
            id: TaskId::new(),
            draft,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from recorded data.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        let TaskRecord {
            id,
            draft,
            created_at,
            updated_at,
        } = record;

        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            category: draft.category,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a change set into this task and refreshes `updated_at`.
    ///
    /// The timestamp is refreshed even when `changes` is empty, matching a
    /// form submitted without edits.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        let TaskChanges {
            title,
            description,
            status,
            priority,
            category,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        if let Some(new_category) = category {
            self.category = new_category;
        }
        self.touch(clock);
    }

    /// Moves the task to `status` and refreshes `updated_at`.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.apply(TaskChanges::status_only(status), clock);
    }

    /// Advances `updated_at` to the clock time, or one microsecond past its
    /// previous value when the clock has not moved forward.
    fn touch(&mut self, clock: &impl Clock) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = clock.utc().max(floor);
    }
}
