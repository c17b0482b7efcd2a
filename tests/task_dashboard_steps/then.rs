//! Then steps for task dashboard BDD scenarios.

use super::world::{DashboardWorld, split_titles, titles_of};
use rstest_bdd_macros::then;
use smart_tasks::task::domain::{TaskCategory, TaskPriority, TaskStatus};

#[then(r#"the newest task has priority "{priority}" and category "{category}""#)]
fn newest_task_triage(
    world: &DashboardWorld,
    priority: String,
    category: String,
) -> Result<(), eyre::Report> {
    let expected_priority = TaskPriority::try_from(priority.as_str())?;
    let expected_category = TaskCategory::try_from(category.as_str())?;
    let all = world.store.list_all()?;
    let newest = all
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;

    if newest.priority() != expected_priority || newest.category() != expected_category {
        return Err(eyre::eyre!(
            "expected {expected_priority}/{expected_category}, found {}/{}",
            newest.priority(),
            newest.category()
        ));
    }
    Ok(())
}

#[then(r#"the newest task has status "{status}""#)]
fn newest_task_status(world: &DashboardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let all = world.store.list_all()?;
    let newest = all
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;

    if newest.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            newest.status()
        ));
    }
    Ok(())
}

#[then(r#"the task list reads "{titles}""#)]
fn task_list_reads(world: &DashboardWorld, titles: String) -> Result<(), eyre::Report> {
    let actual = titles_of(&world.store.list_all()?);
    let expected = split_titles(&titles);
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &DashboardWorld) -> Result<(), eyre::Report> {
    let remaining = world.store.list_all()?;
    eyre::ensure!(
        remaining.is_empty(),
        "expected no tasks, found {}",
        remaining.len()
    );
    Ok(())
}

#[then(r#"the visible tasks read "{titles}""#)]
fn visible_tasks_read(world: &DashboardWorld, titles: String) -> Result<(), eyre::Report> {
    let actual = titles_of(&world.visible);
    let expected = split_titles(&titles);
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"that task has status "{status}""#)]
fn current_task_status(world: &DashboardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let id = world.current_task()?.id();
    let stored = world
        .store
        .get(id)?
        .ok_or_else(|| eyre::eyre!("task {id} not found"))?;
    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("that task was updated after it was created")]
fn current_task_updated_later(world: &DashboardWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(
        task.updated_at() > task.created_at(),
        "updated_at {} is not after created_at {}",
        task.updated_at(),
        task.created_at()
    );
    Ok(())
}

#[then(r#"the notification count for "{headline}" is {count:usize}"#)]
fn notification_count(
    world: &DashboardWorld,
    headline: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let actual = world
        .notifier
        .notices()
        .iter()
        .filter(|notice| notice.headline() == headline)
        .count();
    eyre::ensure!(
        actual == count,
        "expected {count} \"{headline}\" notifications, found {actual}"
    );
    Ok(())
}
