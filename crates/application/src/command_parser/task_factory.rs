//! Task construction from the argument text of add-type commands

use chrono::NaiveDate;
use domain::{CommandKeyword, DomainError, Task};
use tracing::debug;

use crate::date_parser::parse_date_time_on;

/// Separates a deadline's description from its due date
const BY_MARKER: &str = "/by";
/// Introduces an event's start
const FROM_MARKER: &str = "/from";
/// Introduces an event's end
const TO_MARKER: &str = "/to";

/// Builds typed tasks from `todo`, `deadline`, and `event` arguments
///
/// Markers are split on their first occurrence only; marker text appearing
/// again later stays part of the date token and fails date parsing.
#[derive(Debug, Clone, Copy)]
pub struct TaskFactory {
    /// Date that `today` and `tomorrow` resolve against
    today: NaiveDate,
}

impl TaskFactory {
    /// Create a factory resolving relative dates against `today`
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Build the task described by `details` for an add-type keyword
    ///
    /// Non-add keywords are rejected as unrecognized.
    pub fn build(&self, keyword: CommandKeyword, details: &str) -> Result<Task, DomainError> {
        let task = match keyword {
            CommandKeyword::Todo => Task::todo(details.trim()),
            CommandKeyword::Deadline => self.build_deadline(details)?,
            CommandKeyword::Event => self.build_event(details)?,
            CommandKeyword::List
            | CommandKeyword::Mark
            | CommandKeyword::Unmark
            | CommandKeyword::Delete
            | CommandKeyword::Bye => return Err(DomainError::UnrecognizedCommand),
        };
        debug!(keyword = %keyword, task = %task, "Built task");
        Ok(task)
    }

    /// `<description> /by <date>`
    fn build_deadline(&self, details: &str) -> Result<Task, DomainError> {
        let (description, by) = details
            .split_once(BY_MARKER)
            .ok_or_else(DomainError::invalid_deadline_format)?;

        let by = parse_date_time_on(by.trim(), self.today)?;
        Ok(Task::deadline(description.trim(), by))
    }

    /// `<description> /from <date> /to <date>`
    fn build_event(&self, details: &str) -> Result<Task, DomainError> {
        let (description, window) = details
            .split_once(FROM_MARKER)
            .ok_or_else(DomainError::invalid_event_format)?;
        let (start, end) = window
            .split_once(TO_MARKER)
            .ok_or_else(DomainError::invalid_event_format)?;

        let start = parse_date_time_on(start.trim(), self.today)?;
        let end = parse_date_time_on(end.trim(), self.today)?;
        Task::event(description.trim(), start, end)
    }
}
