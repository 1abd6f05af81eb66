//! In-memory task list adapter
//!
//! Implements the `TaskListPort` on top of a `Vec`.

use application::{error::ApplicationError, ports::TaskListPort};
use domain::{Task, TaskIndex};

/// Ordered task list held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskList {
    tasks: Vec<Task>,
}

impl InMemoryTaskList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Create a list holding `tasks` in order
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    fn slot(&self, index: TaskIndex) -> Result<usize, ApplicationError> {
        let offset = index.to_zero_based();
        if offset < self.tasks.len() {
            Ok(offset)
        } else {
            Err(ApplicationError::task_not_found(index, self.tasks.len()))
        }
    }
}

impl TaskListPort for InMemoryTaskList {
    fn append(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    fn get(&self, index: TaskIndex) -> Result<Task, ApplicationError> {
        let offset = self.slot(index)?;
        Ok(self.tasks[offset].clone())
    }

    fn remove(&mut self, index: TaskIndex) -> Result<Task, ApplicationError> {
        let offset = self.slot(index)?;
        Ok(self.tasks.remove(offset))
    }

    fn set_done(&mut self, index: TaskIndex, done: bool) -> Result<Task, ApplicationError> {
        let offset = self.slot(index)?;
        let task = &mut self.tasks[offset];
        if done {
            task.mark_done();
        } else {
            task.mark_undone();
        }
        Ok(task.clone())
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }

    fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(n: usize) -> TaskIndex {
        TaskIndex::new(n).unwrap()
    }

    fn sample() -> InMemoryTaskList {
        InMemoryTaskList::from_tasks(vec![Task::todo("a"), Task::todo("b"), Task::todo("c")])
    }

    #[test]
    fn append_returns_new_size() {
        let mut list = InMemoryTaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.append(Task::todo("a")), 1);
        assert_eq!(list.append(Task::todo("b")), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn get_is_one_based() {
        let list = sample();
        assert_eq!(list.get(index(1)).unwrap(), Task::todo("a"));
        assert_eq!(list.get(index(3)).unwrap(), Task::todo("c"));
    }

    #[test]
    fn out_of_range_is_not_found() {
        let list = sample();
        let err = list.get(index(4)).unwrap_err();
        assert!(matches!(err, ApplicationError::TaskNotFound { count: 3, .. }));
    }

    #[test]
    fn remove_shifts_later_tasks() {
        let mut list = sample();
        assert_eq!(list.remove(index(2)).unwrap(), Task::todo("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(index(2)).unwrap(), Task::todo("c"));
    }

    #[test]
    fn remove_from_empty_list_fails() {
        let mut list = InMemoryTaskList::new();
        assert!(list.remove(index(1)).is_err());
    }

    #[test]
    fn set_done_toggles_flag() {
        let mut list = sample();
        assert!(list.set_done(index(1), true).unwrap().is_done());
        assert!(list.get(index(1)).unwrap().is_done());
        assert!(!list.set_done(index(1), false).unwrap().is_done());
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut list = sample();
        list.replace_all(vec![Task::todo("z")]);
        assert_eq!(list.tasks(), vec![Task::todo("z")]);
    }
}
