//! In-memory integration tests for task store operations.

use super::helpers::{Dashboard, empty_dashboard, titles};
use eyre::{OptionExt, ensure};
use rstest::rstest;
use smart_tasks::task::{
    domain::{TaskCategory, TaskChanges, TaskDomainError, TaskPriority, TaskStatus},
    ports::TaskNotice,
    services::TaskStoreError,
};

#[rstest]
fn created_tasks_are_classified_and_listed_newest_first(
    empty_dashboard: Dashboard,
) -> eyre::Result<()> {
    let Dashboard { store, .. } = empty_dashboard;

    store.create(store.draft("Buy groceries", "milk and eggs")?)?;
    store.create(store.draft("Urgent: fix bug", "")?)?;
    let newest = store.create(store.draft("Read someday", "a book about home repair")?)?;

    ensure!(newest.priority() == TaskPriority::Low);
    ensure!(newest.category() == TaskCategory::Personal);

    let all = store.list_all()?;
    ensure!(titles(&all) == ["Read someday", "Urgent: fix bug", "Buy groceries"]);
    let classified: Vec<(TaskPriority, TaskCategory)> = all
        .iter()
        .map(|task| (task.priority(), task.category()))
        .collect();
    ensure!(
        classified
            == [
                (TaskPriority::Low, TaskCategory::Personal),
                (TaskPriority::High, TaskCategory::Other),
                (TaskPriority::Medium, TaskCategory::Shopping),
            ]
    );
    Ok(())
}

#[rstest]
fn edits_set_priority_and_category_directly(empty_dashboard: Dashboard) -> eyre::Result<()> {
    let Dashboard { store, .. } = empty_dashboard;
    let created = store.create(store.draft("Buy groceries", "")?)?;

    let edited = store
        .update(
            created.id(),
            TaskChanges::new()
                .with_description("for the office party")
                .with_priority(TaskPriority::High)
                .with_category(TaskCategory::Personal),
        )?
        .ok_or_eyre("task should exist")?;

    ensure!(edited.description() == "for the office party");
    ensure!(edited.priority() == TaskPriority::High);
    ensure!(edited.category() == TaskCategory::Personal);
    ensure!(edited.updated_at() > edited.created_at());
    Ok(())
}

#[rstest]
fn blank_titles_never_reach_the_store(empty_dashboard: Dashboard) -> eyre::Result<()> {
    let Dashboard { store, notifier } = empty_dashboard;

    let result = store.draft("  ", "description only");

    ensure!(result == Err(TaskDomainError::EmptyTitle));
    ensure!(store.list_all()?.is_empty());
    ensure!(notifier.notices().is_empty());
    Ok(())
}

#[rstest]
fn status_round_trip_reports_each_change(empty_dashboard: Dashboard) -> eyre::Result<()> {
    let Dashboard { store, notifier } = empty_dashboard;
    let created = store.create(store.draft("Team meeting notes", "")?)?;

    for status in created.status().alternatives() {
        store.set_status(created.id(), status)?;
    }
    store.set_status(created.id(), TaskStatus::Pending)?;

    let summaries: Vec<String> = notifier
        .notices()
        .iter()
        .filter(|notice| matches!(notice, TaskNotice::StatusChanged { .. }))
        .map(TaskNotice::summary)
        .collect();
    ensure!(
        summaries
            == [
                "\"Team meeting notes\" is now in progress.",
                "\"Team meeting notes\" is now completed.",
                "\"Team meeting notes\" is now pending.",
            ]
    );
    Ok(())
}

#[rstest]
fn deleting_twice_removes_once(empty_dashboard: Dashboard) -> eyre::Result<()> {
    let Dashboard { store, notifier } = empty_dashboard;
    let kept = store.create(store.draft("Keep me", "")?)?;
    let dropped = store.create(store.draft("Drop me", "")?)?;

    ensure!(store.delete(dropped.id())?.is_some());
    ensure!(store.delete(dropped.id())?.is_none());

    ensure!(store.list_all()? == vec![kept]);
    let destructive = notifier
        .notices()
        .iter()
        .filter(|notice| notice.is_destructive())
        .count();
    ensure!(destructive == 1);
    Ok(())
}

#[rstest]
fn overlong_edit_title_is_rejected(empty_dashboard: Dashboard) -> eyre::Result<()> {
    let Dashboard { store, .. } = empty_dashboard;
    let created = store.create(store.draft("Short", "")?)?;
    let limit = store.config().max_title_length;

    let result = store.title("x".repeat(limit + 1));

    ensure!(matches!(result, Err(TaskDomainError::TitleTooLong { .. })));
    ensure!(store.get(created.id())? == Some(created));
    Ok(())
}

#[rstest]
fn store_errors_display_their_cause() {
    let err: TaskStoreError = TaskDomainError::EmptyTitle.into();
    assert_eq!(err.to_string(), "task title must not be empty");
}
