//! Closed sets of task status, priority, and category values.

use super::{ParseTaskCategoryError, ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable label used in notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the statuses a task in this status can be moved to.
    ///
    /// The order matches the task card menu: start, complete, reopen.
    #[must_use]
    pub fn alternatives(self) -> Vec<Self> {
        [Self::InProgress, Self::Completed, Self::Pending]
            .into_iter()
            .filter(|candidate| *candidate != self)
            .collect()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    /// Needs attention first.
    High,
    /// Neither urgent nor deferrable.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl TaskPriority {
    /// Every priority, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Life area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    /// Job and professional work.
    Work,
    /// Family, friends, and home.
    Personal,
    /// Courses and learning.
    Study,
    /// Fitness and medical care.
    Health,
    /// Purchases and errands.
    Shopping,
    /// Anything not matching another category.
    #[default]
    Other,
}

impl TaskCategory {
    /// Every category, in dashboard display order.
    pub const ALL: [Self; 6] = [
        Self::Work,
        Self::Personal,
        Self::Study,
        Self::Health,
        Self::Shopping,
        Self::Other,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Study => "study",
            Self::Health => "health",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskCategory {
    type Error = ParseTaskCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "study" => Ok(Self::Study),
            "health" => Ok(Self::Health),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(ParseTaskCategoryError(value.to_owned())),
        }
    }
}
