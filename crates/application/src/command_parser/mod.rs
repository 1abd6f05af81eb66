//! Command parser - Interpret one input line into a typed command
//!
//! - [`CommandParser`]: keyword recognition and argument validation
//! - [`TaskFactory`]: task construction for `todo`, `deadline`, and `event`

mod task_factory;

use chrono::{Local, NaiveDate};
use domain::{CommandKeyword, DomainError, TaskCommand, TaskIndex};
use tracing::debug;

pub use task_factory::TaskFactory;

/// Parser for converting an input line to a [`TaskCommand`]
///
/// Parsing is a pure function of the line and the reference date used for
/// `today` and `tomorrow`, so a parser can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    /// Fixed date for relative keywords; the local date when `None`
    reference_date: Option<NaiveDate>,
}

impl CommandParser {
    /// Create a parser resolving relative dates against the local clock
    pub const fn new() -> Self {
        Self {
            reference_date: None,
        }
    }

    /// Create a parser resolving relative dates against a fixed date
    pub const fn with_reference_date(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
        }
    }

    /// Interpret one input line
    ///
    /// The keyword is matched case-insensitively. Task numbers are checked
    /// for syntax only; range checks happen against the live task list.
    pub fn parse(&self, line: &str) -> Result<TaskCommand, DomainError> {
        let result = self.parse_inner(line);
        match &result {
            Ok(command) => debug!(input = %line, command = ?command, "Parsed command"),
            Err(e) => debug!(input = %line, error = %e, "Rejected command"),
        }
        result
    }

    fn parse_inner(&self, line: &str) -> Result<TaskCommand, DomainError> {
        let (keyword, rest) = split_keyword(line);
        let keyword: CommandKeyword = keyword.parse()?;

        match keyword {
            CommandKeyword::List => Ok(TaskCommand::List),
            CommandKeyword::Bye => Ok(TaskCommand::Exit),
            CommandKeyword::Mark => Ok(TaskCommand::Mark {
                index: extract_task_index(line)?,
            }),
            CommandKeyword::Unmark => Ok(TaskCommand::Unmark {
                index: extract_task_index(line)?,
            }),
            CommandKeyword::Delete => Ok(TaskCommand::Delete {
                index: extract_task_index(line)?,
            }),
            CommandKeyword::Todo | CommandKeyword::Deadline | CommandKeyword::Event => {
                if rest.is_empty() {
                    return Err(DomainError::EmptyDescription);
                }
                let task = TaskFactory::new(self.today()).build(keyword, rest)?;
                Ok(TaskCommand::from(task))
            },
        }
    }

    /// The date `today` resolves to for the next parse
    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Split a trimmed line at its first run of whitespace
///
/// The remainder keeps its inner spacing and is empty when the line holds a
/// single token.
fn split_keyword(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    }
}

/// Read the task number from the second whitespace-separated token
///
/// Tokens after the number are ignored.
fn extract_task_index(line: &str) -> Result<TaskIndex, DomainError> {
    line.split_whitespace()
        .nth(1)
        .ok_or(DomainError::InvalidIndex)?
        .parse()
}
