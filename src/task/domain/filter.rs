//! Search and categorical filtering over task lists.

use super::{
    ParseTaskCategoryError, ParseTaskPriorityError, ParseTaskStatusError, Task, TaskCategory,
    TaskPriority, TaskStatus,
};
use serde::{Deserialize, Serialize};

/// Wire name of the neutral selection.
const ALL: &str = "all";

/// A categorical filter value: either everything or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSelection<T> {
    /// Matches every value.
    #[default]
    All,
    /// Matches only the given value.
    Only(T),
}

impl<T: PartialEq> FilterSelection<T> {
    /// Returns `true` when `value` passes this selection.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Returns `true` unless this is [`FilterSelection::All`].
    #[must_use]
    pub const fn is_restrictive(&self) -> bool {
        matches!(self, Self::Only(_))
    }
}

impl<T> From<T> for FilterSelection<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

impl TryFrom<&str> for FilterSelection<TaskStatus> {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_selection(value)
    }
}

impl TryFrom<&str> for FilterSelection<TaskPriority> {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_selection(value)
    }
}

impl TryFrom<&str> for FilterSelection<TaskCategory> {
    type Error = ParseTaskCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_selection(value)
    }
}

fn parse_selection<'a, T>(value: &'a str) -> Result<FilterSelection<T>, T::Error>
where
    T: TryFrom<&'a str>,
{
    if value.trim().eq_ignore_ascii_case(ALL) {
        return Ok(FilterSelection::All);
    }
    T::try_from(value).map(FilterSelection::Only)
}

/// Current search text and categorical filters of a task list view.
///
/// A task is visible when it satisfies every dimension at once: the query
/// (case-insensitive substring of title or description, empty matches all)
/// and each of the status, priority, and category selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    status: FilterSelection<TaskStatus>,
    priority: FilterSelection<TaskPriority>,
    category: FilterSelection<TaskCategory>,
}

impl TaskFilter {
    /// Creates a neutral filter that admits every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().to_lowercase();
        self
    }

    /// Sets the status selection.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<FilterSelection<TaskStatus>>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the priority selection.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<FilterSelection<TaskPriority>>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the category selection.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<FilterSelection<TaskCategory>>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the lower-cased search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` when any dimension can hide a task.
    ///
    /// Lets an empty result distinguish "no tasks yet" from "the filters
    /// hide everything".
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.status.is_restrictive()
            || self.priority.is_restrictive()
            || self.category.is_restrictive()
    }

    /// Returns `true` when `task` passes every dimension.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_query(task)
            && self.status.admits(&task.status())
            && self.priority.admits(&task.priority())
            && self.category.admits(&task.category())
    }

    /// Returns the visible subset of `tasks`, preserving their order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }

    fn matches_query(&self, task: &Task) -> bool {
        self.query.is_empty()
            || task.title().as_str().to_lowercase().contains(&self.query)
            || task.description().to_lowercase().contains(&self.query)
    }
}

/// Returns the tasks from `tasks` that pass `filter`, in their original order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    filter.apply(tasks)
}
