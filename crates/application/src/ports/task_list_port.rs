//! Task list port
//!
//! Defines the interface for the ordered, index-addressed task list.

use domain::{Task, TaskIndex};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the in-process task list
///
/// Positions are 1-based [`TaskIndex`] values; implementations translate
/// them to their own storage and report out-of-range positions as
/// [`ApplicationError::TaskNotFound`].
#[cfg_attr(test, automock)]
pub trait TaskListPort {
    /// Append a task and return the new number of tasks
    fn append(&mut self, task: Task) -> usize;

    /// Get a copy of the task at `index`
    fn get(&self, index: TaskIndex) -> Result<Task, ApplicationError>;

    /// Remove and return the task at `index`
    fn remove(&mut self, index: TaskIndex) -> Result<Task, ApplicationError>;

    /// Set the completion flag of the task at `index` and return the result
    fn set_done(&mut self, index: TaskIndex, done: bool) -> Result<Task, ApplicationError>;

    /// Number of tasks
    fn len(&self) -> usize;

    /// Copy of every task in list order
    fn tasks(&self) -> Vec<Task>;

    /// Replace the whole list, e.g. after loading from storage
    fn replace_all(&mut self, tasks: Vec<Task>);

    /// Check whether the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
