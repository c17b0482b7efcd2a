//! In-memory ordered task repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks live in one `Vec`, front to back in list order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))
    }
}

fn position_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

fn ensure_absent(tasks: &[Task], id: TaskId) -> TaskRepositoryResult<()> {
    if position_of(tasks, id).is_some() {
        return Err(TaskRepositoryError::DuplicateTask(id));
    }
    Ok(())
}

impl TaskRepository for InMemoryTaskRepository {
    fn prepend(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        ensure_absent(&tasks, task.id())?;
        tasks.insert(0, task.clone());
        Ok(())
    }

    fn append(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        ensure_absent(&tasks, task.id())?;
        tasks.push(task.clone());
        Ok(())
    }

    fn modify(
        &self,
        id: TaskId,
        change: &mut dyn FnMut(&mut Task),
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.write()?;
        Ok(tasks.iter_mut().find(|task| task.id() == id).map(|task| {
            change(task);
            task.clone()
        }))
    }

    fn remove(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.write()?;
        Ok(position_of(&tasks, id).map(|index| tasks.remove(index)))
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(tasks.clone())
    }
}
