//! Demo seed list loaded when the dashboard starts without saved state.

use chrono::{DateTime, Utc};

use crate::task::domain::{
    Task, TaskCategory, TaskDomainError, TaskDraft, TaskId, TaskPriority, TaskRecord, TaskStatus,
    TaskTitle,
};

struct DemoTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    category: TaskCategory,
    created_at: i64,
    updated_at: i64,
}

/// Demo tasks, newest first. Timestamps are seconds since the Unix epoch.
const DEMO_TASKS: [DemoTask; 4] = [
    DemoTask {
        title: "Complete urgent project proposal",
        description: "Need to finish the important client project proposal by end of day. \
                      This is critical for the meeting tomorrow.",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        category: TaskCategory::Work,
        created_at: 1_705_312_800, // 2024-01-15T10:00:00Z
        updated_at: 1_705_312_800,
    },
    DemoTask {
        title: "Buy groceries for the week",
        description: "Get milk, bread, eggs, and vegetables from the grocery store",
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        category: TaskCategory::Shopping,
        created_at: 1_705_246_200, // 2024-01-14T15:30:00Z
        updated_at: 1_705_246_200,
    },
    DemoTask {
        title: "Study machine learning course",
        description: "Review homework and learn about neural networks for tomorrow's class",
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        category: TaskCategory::Study,
        created_at: 1_705_137_300, // 2024-01-13T09:15:00Z
        updated_at: 1_705_137_300,
    },
    DemoTask {
        title: "Schedule doctor appointment",
        description: "Call the health center to schedule a routine checkup",
        status: TaskStatus::Completed,
        priority: TaskPriority::Medium,
        category: TaskCategory::Health,
        created_at: 1_705_057_200, // 2024-01-12T11:00:00Z
        updated_at: 1_705_327_200, // 2024-01-15T14:00:00Z
    },
];

fn timestamp(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

/// Returns the demo seed list with fresh identifiers, newest first.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a demo title fails validation.
pub fn demo_tasks() -> Result<Vec<Task>, TaskDomainError> {
    DEMO_TASKS
        .iter()
        .map(|demo| -> Result<Task, TaskDomainError> {
            let draft = TaskDraft::new(TaskTitle::new(demo.title)?)
                .with_description(demo.description)
                .with_status(demo.status)
                .with_priority(demo.priority)
                .with_category(demo.category);
            Ok(Task::from_record(TaskRecord {
                id: TaskId::new(),
                draft,
                created_at: timestamp(demo.created_at),
                updated_at: timestamp(demo.updated_at),
            }))
        })
        .collect()
}
