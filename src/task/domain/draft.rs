//! Input payloads for creating and editing tasks.

use super::{TaskCategory, TaskPriority, TaskStatus, TaskTitle, classify};

/// Field values for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Validated title.
    pub title: TaskTitle,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Initial category.
    pub category: TaskCategory,
}

impl TaskDraft {
    /// Creates a pending draft with medium priority and the other category.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            category: TaskCategory::default(),
        }
    }

    /// Creates a pending draft whose priority and category are inferred from
    /// the validated title and description.
    ///
    /// Edits never reclassify; they set priority and category explicitly
    /// through [`TaskChanges`].
    #[must_use]
    pub fn classified(title: TaskTitle, description: impl Into<String>) -> Self {
        let description = description.into();
        let classification = classify(title.as_str(), &description);
        Self {
            title,
            description,
            status: TaskStatus::default(),
            priority: classification.priority,
            category: classification.category,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }
}

/// Partial update for an existing task. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement category.
    pub category: Option<TaskCategory>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a change set that only replaces the status.
    #[must_use]
    pub fn status_only(status: TaskStatus) -> Self {
        Self::new().with_status(status)
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }
}
