//! Task service - Executes parsed commands against the task list

use std::fmt;

use domain::{DomainError, Task, TaskCommand, TaskIndex};
use tracing::{debug, info, instrument, warn};

use super::response_formatter::{
    format_goodbye, format_task_added, format_task_deleted, format_task_done, format_task_list,
    format_task_undone,
};
use crate::{
    command_parser::CommandParser,
    error::ApplicationError,
    ports::{TaskListPort, TaskStoragePort},
};

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Response text for the user
    pub response: String,
    /// Whether the session should end
    pub exit: bool,
}

/// Service executing commands against a task list
///
/// Owns the task list exclusively. When storage is attached and autosave is
/// on, the full list is saved after every command that changes it.
pub struct TaskService<L> {
    tasks: L,
    storage: Option<Box<dyn TaskStoragePort>>,
    autosave: bool,
}

impl<L> fmt::Debug for TaskService<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskService")
            .field("has_storage", &self.storage.is_some())
            .field("autosave", &self.autosave)
            .finish_non_exhaustive()
    }
}

impl<L: TaskListPort> TaskService<L> {
    /// Create a service without persistence
    pub fn new(tasks: L) -> Self {
        Self {
            tasks,
            storage: None,
            autosave: true,
        }
    }

    /// Attach a storage backend
    #[must_use]
    pub fn with_storage(mut self, storage: Box<dyn TaskStoragePort>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Enable or disable saving after each change
    #[must_use]
    pub const fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// The task list
    pub const fn tasks(&self) -> &L {
        &self.tasks
    }

    /// Replace the task list with the stored tasks
    ///
    /// Returns the number of tasks loaded; zero when no storage is attached.
    pub fn load_from_storage(&mut self) -> Result<usize, ApplicationError> {
        let Some(storage) = &self.storage else {
            return Ok(0);
        };
        let loaded = storage.load()?;
        let count = loaded.len();
        self.tasks.replace_all(loaded);
        info!(count, "Loaded tasks from storage");
        Ok(count)
    }

    /// Save the task list, if storage is attached
    pub fn save(&self) -> Result<(), ApplicationError> {
        if let Some(storage) = &self.storage {
            storage.save(&self.tasks.tasks())?;
            debug!(count = self.tasks.len(), "Saved tasks");
        }
        Ok(())
    }

    /// Parse one input line and execute it
    pub fn handle_line(
        &mut self,
        parser: &CommandParser,
        line: &str,
    ) -> Result<ExecutionResult, ApplicationError> {
        let command = parser.parse(line)?;
        self.execute(&command)
    }

    /// Execute a parsed command
    ///
    /// When the autosave after a change fails, the change is undone so the
    /// list matches what was last saved.
    #[instrument(skip_all, fields(command = %command.keyword()))]
    pub fn execute(&mut self, command: &TaskCommand) -> Result<ExecutionResult, ApplicationError> {
        info!(description = %command.description(), "Executing command");

        let snapshot = (command.mutates_tasks() && self.autosave && self.storage.is_some())
            .then(|| self.tasks.tasks());

        let response = match command {
            TaskCommand::List => format_task_list(&self.tasks.tasks()),
            TaskCommand::AddTodo { .. }
            | TaskCommand::AddDeadline { .. }
            | TaskCommand::AddEvent { .. } => {
                let task = command
                    .to_task()
                    .transpose()?
                    .ok_or(DomainError::UnrecognizedCommand)?;
                self.add(task)
            },
            TaskCommand::Mark { index } => self.set_done(*index, true)?,
            TaskCommand::Unmark { index } => self.set_done(*index, false)?,
            TaskCommand::Delete { index } => self.delete(*index)?,
            TaskCommand::Exit => format_goodbye(),
        };

        if let Some(snapshot) = snapshot {
            if let Err(e) = self.save() {
                warn!(error = %e, "Failed to save tasks, reverting change");
                self.tasks.replace_all(snapshot);
                return Err(e);
            }
        }

        Ok(ExecutionResult {
            response,
            exit: command.is_exit(),
        })
    }

    fn add(&mut self, task: Task) -> String {
        let added = task.clone();
        let count = self.tasks.append(task);
        format_task_added(&added, count)
    }

    fn set_done(&mut self, index: TaskIndex, done: bool) -> Result<String, ApplicationError> {
        let task = self.tasks.set_done(index, done)?;
        Ok(if done {
            format_task_done(&task)
        } else {
            format_task_undone(&task)
        })
    }

    fn delete(&mut self, index: TaskIndex) -> Result<String, ApplicationError> {
        let task = self.tasks.remove(index)?;
        Ok(format_task_deleted(&task, self.tasks.len()))
    }
}
