//! Service owning the task collection and its create/edit/delete operations.

use crate::task::{
    domain::{
        Classification, StatusCounts, Task, TaskChanges, TaskDomainError, TaskDraft, TaskFilter,
        TaskId, TaskStatus, TaskTitle, classify,
    },
    ports::{TaskNotice, TaskNotifier, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::{TaskStoreConfig, demo_tasks};

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store service.
///
/// Operations referencing an unknown task identifier are silent no-ops that
/// return `Ok(None)`. Every successful change is reported to the notifier
/// after the repository has accepted it.
#[derive(Clone)]
pub struct TaskStore<R, N, C>
where
    R: TaskRepository,
    N: TaskNotifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<R, N, C> TaskStore<R, N, C>
where
    R: TaskRepository,
    N: TaskNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a store over `repository` with default settings.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            clock,
            config: TaskStoreConfig::default(),
        }
    }

    /// Creates a store with `config`, loading the demo seed list when
    /// [`TaskStoreConfig::seed_demo_tasks`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the seed list cannot be built or
    /// stored.
    pub fn from_config(
        repository: Arc<R>,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: TaskStoreConfig,
    ) -> TaskStoreResult<Self> {
        let store = Self::new(repository, notifier, clock).with_config(config);
        if config.seed_demo_tasks {
            let loaded = store.seed(demo_tasks()?)?;
            tracing::debug!(loaded, "seeded demo tasks");
        }
        Ok(store)
    }

    /// Replaces the store settings.
    #[must_use]
    pub fn with_config(mut self, config: TaskStoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the store settings.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Validates a title against the configured length limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the title is rejected.
    pub fn title(&self, raw: impl Into<String>) -> Result<TaskTitle, TaskDomainError> {
        TaskTitle::with_limit(raw, self.config.max_title_length)
    }

    /// Builds a pending draft from form input, inferring priority and
    /// category from the text as typed, before the title is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is rejected.
    pub fn draft(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TaskDraft, TaskDomainError> {
        let raw_title = title.into();
        let description = description.into();
        let Classification { priority, category } = classify(&raw_title, &description);
        Ok(TaskDraft::new(self.title(raw_title)?)
            .with_description(description)
            .with_priority(priority)
            .with_category(category))
    }

    /// Stores a new task at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title exceeds the
    /// configured limit, or [`TaskStoreError::Repository`] when the
    /// repository rejects the task.
    pub fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        self.check_title(&draft.title)?;
        let task = Task::new(draft, &*self.clock);
        self.repository.prepend(&task)?;
        self.notifier.notify(&TaskNotice::Created(task.clone()));
        Ok(task)
    }

    /// Merges `changes` into the task with `id`.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when a replacement title exceeds
    /// the configured limit, or [`TaskStoreError::Repository`] when the
    /// repository fails.
    pub fn update(&self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Option<Task>> {
        if let Some(title) = &changes.title {
            self.check_title(title)?;
        }
        let updated = self.modify(id, "update", |task| {
            task.apply(changes.clone(), &*self.clock);
        })?;

        if let Some(task) = &updated {
            self.notifier.notify(&TaskNotice::Updated(task.clone()));
        }
        Ok(updated)
    }

    /// Moves the task with `id` to `status`.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Option<Task>> {
        let moved = self.modify(id, "set_status", |task| {
            task.set_status(status, &*self.clock);
        })?;

        if let Some(task) = &moved {
            self.notifier.notify(&TaskNotice::StatusChanged {
                task: task.clone(),
                status,
            });
        }
        Ok(moved)
    }

    /// Removes the task with `id`, returning it when it existed.
    ///
    /// Deleting an absent task is a no-op, so repeated deletes are safe.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn delete(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let removed = self.repository.remove(id)?;
        match &removed {
            Some(task) => self.notifier.notify(&TaskNotice::Deleted(task.clone())),
            None => tracing::debug!(task_id = %id, "delete ignored, task not found"),
        }
        Ok(removed)
    }

    /// Returns the task with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list_all()?)
    }

    /// Returns the tasks passing `filter`, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn filter(&self, filter: &TaskFilter) -> TaskStoreResult<Vec<Task>> {
        Ok(filter.apply(&self.list_all()?))
    }

    /// Counts all tasks by status, ignoring any filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn status_counts(&self) -> TaskStoreResult<StatusCounts> {
        Ok(StatusCounts::tally(&self.list_all()?))
    }

    /// Appends `tasks` to the end of the list in the given order, returning
    /// how many were loaded.
    ///
    /// Tasks whose identifier is already present are skipped. Seeding does
    /// not notify.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails for a
    /// reason other than a duplicate identifier.
    pub fn seed(&self, tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<usize> {
        let mut loaded = 0;
        for task in tasks {
            match self.repository.append(&task) {
                Ok(()) => loaded += 1,
                Err(TaskRepositoryError::DuplicateTask(id)) => {
                    tracing::warn!(task_id = %id, "skipping duplicate seed task");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(loaded)
    }

    fn modify(
        &self,
        id: TaskId,
        operation: &'static str,
        mut change: impl FnMut(&mut Task),
    ) -> TaskStoreResult<Option<Task>> {
        let found = self.repository.modify(id, &mut change)?;
        if found.is_none() {
            tracing::debug!(task_id = %id, operation, "ignored, task not found");
        }
        Ok(found)
    }

    fn check_title(&self, title: &TaskTitle) -> Result<(), TaskDomainError> {
        let actual = title.as_str().chars().count();
        let limit = self.config.max_title_length;
        if actual > limit {
            return Err(TaskDomainError::TitleTooLong { actual, limit });
        }
        Ok(())
    }
}
