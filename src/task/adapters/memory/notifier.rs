//! Recording notifier for tests and polling front ends.

use std::sync::{Arc, Mutex, PoisonError};

use crate::task::ports::{TaskNotice, TaskNotifier};

/// Notifier that keeps every notice it receives, oldest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskNotifier {
    notices: Arc<Mutex<Vec<TaskNotice>>>,
}

impl InMemoryTaskNotifier {
    /// Creates a notifier with no recorded notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded notices.
    #[must_use]
    pub fn notices(&self) -> Vec<TaskNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the recorded notices.
    #[must_use]
    pub fn drain(&self) -> Vec<TaskNotice> {
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *notices)
    }
}

impl TaskNotifier for InMemoryTaskNotifier {
    fn notify(&self, notice: &TaskNotice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
