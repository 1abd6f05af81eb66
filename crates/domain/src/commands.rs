//! Task commands - Strongly typed representations of user intents

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Task, TaskKind},
    errors::DomainError,
    value_objects::TaskIndex,
};

/// The closed set of command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKeyword {
    List,
    Todo,
    Deadline,
    Event,
    Mark,
    Unmark,
    Delete,
    Bye,
}

impl CommandKeyword {
    /// Every keyword, in help order
    pub const ALL: [Self; 8] = [
        Self::List,
        Self::Todo,
        Self::Deadline,
        Self::Event,
        Self::Mark,
        Self::Unmark,
        Self::Delete,
        Self::Bye,
    ];

    /// The keyword as typed by the user
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Bye => "bye",
        }
    }
}

impl fmt::Display for CommandKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKeyword {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIST" => Ok(Self::List),
            "TODO" => Ok(Self::Todo),
            "DEADLINE" => Ok(Self::Deadline),
            "EVENT" => Ok(Self::Event),
            "MARK" => Ok(Self::Mark),
            "UNMARK" => Ok(Self::Unmark),
            "DELETE" => Ok(Self::Delete),
            "BYE" => Ok(Self::Bye),
            _ => Err(DomainError::UnrecognizedCommand),
        }
    }
}

/// All commands the assistant can execute
///
/// Each variant is the interpretation of one input line. Commands are
/// transient: they are executed immediately and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskCommand {
    /// Show every task
    List,

    /// Add a plain to-do
    AddTodo {
        /// Task description
        description: String,
    },

    /// Add a task with a due instant
    AddDeadline {
        /// Task description
        description: String,
        /// Due instant
        by: NaiveDateTime,
    },

    /// Add a task spanning a time window
    AddEvent {
        /// Task description
        description: String,
        /// Start of the window
        start: NaiveDateTime,
        /// End of the window
        end: NaiveDateTime,
    },

    /// Mark a task as done
    Mark {
        /// 1-based task number
        index: TaskIndex,
    },

    /// Mark a task as not done
    Unmark {
        /// 1-based task number
        index: TaskIndex,
    },

    /// Remove a task
    Delete {
        /// 1-based task number
        index: TaskIndex,
    },

    /// End the session
    Exit,
}

impl TaskCommand {
    /// The keyword this command was parsed from
    #[must_use]
    pub const fn keyword(&self) -> CommandKeyword {
        match self {
            Self::List => CommandKeyword::List,
            Self::AddTodo { .. } => CommandKeyword::Todo,
            Self::AddDeadline { .. } => CommandKeyword::Deadline,
            Self::AddEvent { .. } => CommandKeyword::Event,
            Self::Mark { .. } => CommandKeyword::Mark,
            Self::Unmark { .. } => CommandKeyword::Unmark,
            Self::Delete { .. } => CommandKeyword::Delete,
            Self::Exit => CommandKeyword::Bye,
        }
    }

    /// Check if executing this command changes the task list
    #[must_use]
    pub const fn mutates_tasks(&self) -> bool {
        !matches!(self, Self::List | Self::Exit)
    }

    /// Check if this command ends the session
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Build the task an add-type command describes
    ///
    /// Returns `None` for commands that do not add a task. The event window
    /// is checked again, since commands can also be deserialized.
    pub fn to_task(&self) -> Option<Result<Task, DomainError>> {
        match self {
            Self::AddTodo { description } => Some(Ok(Task::todo(description.clone()))),
            Self::AddDeadline { description, by } => {
                Some(Ok(Task::deadline(description.clone(), *by)))
            },
            Self::AddEvent {
                description,
                start,
                end,
            } => Some(Task::event(description.clone(), *start, *end)),
            Self::List
            | Self::Mark { .. }
            | Self::Unmark { .. }
            | Self::Delete { .. }
            | Self::Exit => None,
        }
    }

    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Self::List => "List tasks".to_string(),
            Self::AddTodo { description } => format!("Add todo '{description}'"),
            Self::AddDeadline { description, by } => {
                format!("Add deadline '{description}' by {by}")
            },
            Self::AddEvent {
                description,
                start,
                end,
            } => format!("Add event '{description}' from {start} to {end}"),
            Self::Mark { index } => format!("Mark task {index} as done"),
            Self::Unmark { index } => format!("Mark task {index} as not done"),
            Self::Delete { index } => format!("Delete task {index}"),
            Self::Exit => "Exit".to_string(),
        }
    }
}

impl From<Task> for TaskCommand {
    fn from(task: Task) -> Self {
        let Task {
            description, kind, ..
        } = task;
        match kind {
            TaskKind::Todo => Self::AddTodo { description },
            TaskKind::Deadline { by } => Self::AddDeadline { description, by },
            TaskKind::Event { start, end } => Self::AddEvent {
                description,
                start,
                end,
            },
        }
    }
}
