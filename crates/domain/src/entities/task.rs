//! Task entity - A to-do item, a deadline, or a timed event

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Display format for instants, e.g. `Jan 15 2024 18:30`
const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Variant-specific scheduling data of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do without scheduling data
    Todo,
    /// Task that must be done by a point in time
    Deadline {
        /// Due instant
        by: NaiveDateTime,
    },
    /// Task occupying a time window, `start <= end`
    Event {
        /// Start of the window
        start: NaiveDateTime,
        /// End of the window
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used when rendering a task
    #[must_use]
    pub const fn icon(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A task held in the task list
///
/// Only the completion flag changes after construction. The task's identity
/// is its position in the list. Deserialization goes through the same checks
/// as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// What needs doing
    pub description: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
    /// Scheduling data
    #[serde(flatten)]
    pub kind: TaskKind,
}

/// Unchecked wire form of a [`Task`]
#[derive(Deserialize)]
struct TaskRecord {
    description: String,
    #[serde(default)]
    done: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

impl TryFrom<TaskRecord> for Task {
    type Error = DomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = match record.kind {
            TaskKind::Todo => Self::todo(record.description),
            TaskKind::Deadline { by } => Self::deadline(record.description, by),
            TaskKind::Event { start, end } => Self::event(record.description, start, end)?,
        };
        task.done = record.done;
        Ok(task)
    }
}

impl Task {
    /// Create a plain to-do
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a task due at `by`
    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    /// Create an event spanning `start..=end`
    ///
    /// Fails with [`DomainError::InvalidTimeRange`] when `start` is after `end`.
    pub fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidTimeRange);
        }
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        })
    }

    /// Mark the task as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task as not done
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Check whether the task is done
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Completion marker used when rendering
    #[must_use]
    pub const fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.icon(),
            self.status_icon(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by.format(DISPLAY_FORMAT)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                start.format(DISPLAY_FORMAT),
                end.format(DISPLAY_FORMAT)
            ),
        }
    }
}
