//! Configuration for the task store service.

/// Settings applied by [`super::TaskStore`].
///
/// # Examples
///
/// ```
/// use smart_tasks::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert!(!config.seed_demo_tasks);
///
/// let demo = TaskStoreConfig::default().with_demo_tasks();
/// assert!(demo.seed_demo_tasks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Maximum title length in characters, measured after trimming.
    pub max_title_length: usize,
    /// Whether [`super::TaskStore::from_config`] loads the demo seed list.
    pub seed_demo_tasks: bool,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            max_title_length: 500,
            seed_demo_tasks: false,
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration with no title length limit.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_title_length: usize::MAX,
            ..Default::default()
        }
    }

    /// Creates a configuration with a short title limit.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 120,
            seed_demo_tasks: false,
        }
    }

    /// Enables loading the demo seed list on start-up.
    #[must_use]
    pub const fn with_demo_tasks(mut self) -> Self {
        self.seed_demo_tasks = true;
        self
    }
}
