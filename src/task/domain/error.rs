//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured character limit.
    #[error("task title is {actual} characters, limit is {limit}")]
    TitleTooLong {
        /// Number of characters in the rejected title.
        actual: usize,
        /// Configured maximum number of characters.
        limit: usize,
    },
}

/// Error returned while parsing a task status from its wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority from its wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a task category from its wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task category: {0}")]
pub struct ParseTaskCategoryError(pub String);

/// Error returned while parsing a task identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
