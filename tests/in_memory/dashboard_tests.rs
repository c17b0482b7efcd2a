//! In-memory integration tests for the seeded dashboard view.

use super::helpers::{Dashboard, demo_dashboard, titles};
use eyre::ensure;
use rstest::rstest;
use smart_tasks::task::domain::{
    FilterSelection, StatusCounts, TaskCategory, TaskFilter, TaskPriority, TaskStatus,
};

#[rstest]
fn neutral_filter_shows_every_task(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    ensure!(store.filter(&TaskFilter::new())? == store.list_all()?);
    Ok(())
}

#[rstest]
fn search_matches_descriptions(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    let visible = store.filter(&TaskFilter::new().with_query("GROCERY"))?;
    ensure!(titles(&visible) == ["Buy groceries for the week"]);
    Ok(())
}

#[rstest]
fn pending_high_priority_tasks(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    let filter = TaskFilter::new()
        .with_status(TaskStatus::Pending)
        .with_priority(TaskPriority::High);
    ensure!(titles(&store.filter(&filter)?) == ["Study machine learning course"]);
    Ok(())
}

#[rstest]
fn filters_parsed_from_select_values(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    let filter = TaskFilter::new()
        .with_status(FilterSelection::<TaskStatus>::try_from("all")?)
        .with_priority(FilterSelection::<TaskPriority>::try_from("all")?)
        .with_category(FilterSelection::<TaskCategory>::try_from("health")?);
    ensure!(titles(&store.filter(&filter)?) == ["Schedule doctor appointment"]);
    Ok(())
}

#[rstest]
fn empty_result_with_active_filter(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    let filter = TaskFilter::new().with_query("no such task");
    ensure!(store.filter(&filter)?.is_empty());
    ensure!(filter.is_active());
    ensure!(!store.list_all()?.is_empty());
    Ok(())
}

#[rstest]
fn counts_follow_status_changes(demo_dashboard: eyre::Result<Dashboard>) -> eyre::Result<()> {
    let Dashboard { store, .. } = demo_dashboard?;
    ensure!(
        store.status_counts()?
            == StatusCounts {
                pending: 2,
                in_progress: 1,
                completed: 1
            }
    );

    for task in store.filter(&TaskFilter::new().with_status(TaskStatus::Pending))? {
        store.set_status(task.id(), TaskStatus::Completed)?;
    }

    let counts = store.status_counts()?;
    ensure!(counts.get(TaskStatus::Pending) == 0);
    ensure!(counts.get(TaskStatus::Completed) == 3);
    ensure!(counts.total() == 4);
    Ok(())
}
