//! Keyword heuristic assigning a default priority and category to new tasks.
//!
//! Rules are evaluated in declaration order and the first group containing a
//! matching keyword wins. There is no scoring: reordering a group changes the
//! outcome for text that matches more than one group.

use super::{TaskCategory, TaskPriority};
use serde::{Deserialize, Serialize};

/// Priority rules, checked before falling back to [`TaskPriority::Medium`].
const PRIORITY_RULES: [(TaskPriority, &[&str]); 2] = [
    (
        TaskPriority::High,
        &["urgent", "asap", "important", "critical"],
    ),
    (
        TaskPriority::Low,
        &["later", "someday", "maybe", "low priority"],
    ),
];

/// Category rules, checked before falling back to [`TaskCategory::Other`].
const CATEGORY_RULES: [(TaskCategory, &[&str]); 5] = [
    (TaskCategory::Work, &["work", "meeting", "project", "office"]),
    (TaskCategory::Study, &["study", "homework", "learn", "course"]),
    (TaskCategory::Health, &["exercise", "doctor", "health", "gym"]),
    (TaskCategory::Shopping, &["buy", "shop", "purchase", "grocery"]),
    (
        TaskCategory::Personal,
        &["family", "friend", "personal", "home"],
    ),
];

/// Priority and category inferred from task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Classification {
    /// Inferred priority.
    pub priority: TaskPriority,
    /// Inferred category.
    pub category: TaskCategory,
}

/// Classifies a task from its title and description.
///
/// Matching is a case-insensitive substring search over the title and
/// description joined by a single space.
///
/// # Examples
///
/// ```
/// use smart_tasks::task::domain::{TaskCategory, TaskPriority, classify};
///
/// let result = classify("buy groceries", "milk and eggs");
/// assert_eq!(result.priority, TaskPriority::Medium);
/// assert_eq!(result.category, TaskCategory::Shopping);
/// ```
#[must_use]
pub fn classify(title: &str, description: &str) -> Classification {
    let text = format!("{title} {description}").to_lowercase();

    Classification {
        priority: first_match(&PRIORITY_RULES, &text).unwrap_or_default(),
        category: first_match(&CATEGORY_RULES, &text).unwrap_or_default(),
    }
}

fn first_match<T: Copy>(rules: &[(T, &[&str])], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(value, _)| *value)
}
