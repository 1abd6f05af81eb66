//! Task storage port
//!
//! Defines the interface for persisting the task list between sessions.

use domain::Task;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading and saving the full task list
#[cfg_attr(test, automock)]
pub trait TaskStoragePort {
    /// Load every saved task; an absent store yields an empty list
    fn load(&self) -> Result<Vec<Task>, ApplicationError>;

    /// Replace the saved tasks with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<(), ApplicationError>;
}
