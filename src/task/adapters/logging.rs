//! Notifier that reports task changes through `tracing`.

use crate::task::ports::{TaskNotice, TaskNotifier};

/// Emits one `tracing` event per notice.
///
/// Deletions are logged at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTaskNotifier;

impl TaskNotifier for TracingTaskNotifier {
    fn notify(&self, notice: &TaskNotice) {
        let task = notice.task();
        if notice.is_destructive() {
            tracing::warn!(
                task_id = %task.id(),
                headline = notice.headline(),
                "{}",
                notice.summary()
            );
        } else {
            tracing::info!(
                task_id = %task.id(),
                status = %task.status(),
                headline = notice.headline(),
                "{}",
                notice.summary()
            );
        }
    }
}
