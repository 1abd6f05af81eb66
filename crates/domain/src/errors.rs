//! Domain-level errors
//!
//! The messages are shown to the user verbatim, so their wording is part of
//! the observable interface.

use thiserror::Error;

/// Format hint for a `deadline` command without a `/by` marker
pub const DEADLINE_FORMAT_HINT: &str =
    "Invalid deadline format. Please include '/by' followed by the deadline.";

/// Format hint for an `event` command without `/from` or `/to` markers
pub const EVENT_FORMAT_HINT: &str = "Invalid event format. Please include '/from' followed by start time and '/to' followed by end time.";

/// Errors that can occur while interpreting a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// First token is not a known command keyword
    #[error("I'm sorry, but I don't know what that means :-(")]
    UnrecognizedCommand,

    /// Add-type command without any argument text
    #[error("Description cannot be empty.")]
    EmptyDescription,

    /// Deadline or event arguments are missing a required marker
    #[error("{0}")]
    InvalidFormat(&'static str),

    /// Event starts strictly after it ends
    #[error("Invalid event times. The start time is after the end time.")]
    InvalidTimeRange,

    /// Date/time token matches none of the accepted forms
    #[error(
        "Invalid date/time format. Please use 'yyyy/MM/dd HHmm', 'yyyy/MM/dd', 'today', or 'tomorrow'."
    )]
    InvalidDateTime,

    /// Task number is missing or not a positive integer
    #[error("Invalid task number. Please provide a valid task number.")]
    InvalidIndex,
}

impl DomainError {
    /// Create the format error for a missing `/by` marker
    pub const fn invalid_deadline_format() -> Self {
        Self::InvalidFormat(DEADLINE_FORMAT_HINT)
    }

    /// Create the format error for a missing `/from` or `/to` marker
    pub const fn invalid_event_format() -> Self {
        Self::InvalidFormat(EVENT_FORMAT_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_command_message() {
        assert_eq!(
            DomainError::UnrecognizedCommand.to_string(),
            "I'm sorry, but I don't know what that means :-("
        );
    }

    #[test]
    fn empty_description_message() {
        assert_eq!(
            DomainError::EmptyDescription.to_string(),
            "Description cannot be empty."
        );
    }

    #[test]
    fn deadline_format_message() {
        assert_eq!(
            DomainError::invalid_deadline_format().to_string(),
            "Invalid deadline format. Please include '/by' followed by the deadline."
        );
    }

    #[test]
    fn event_format_message() {
        assert_eq!(
            DomainError::invalid_event_format().to_string(),
            "Invalid event format. Please include '/from' followed by start time and '/to' followed by end time."
        );
    }

    #[test]
    fn time_range_message() {
        assert_eq!(
            DomainError::InvalidTimeRange.to_string(),
            "Invalid event times. The start time is after the end time."
        );
    }

    #[test]
    fn date_time_message() {
        assert_eq!(
            DomainError::InvalidDateTime.to_string(),
            "Invalid date/time format. Please use 'yyyy/MM/dd HHmm', 'yyyy/MM/dd', 'today', or 'tomorrow'."
        );
    }

    #[test]
    fn index_message() {
        assert_eq!(
            DomainError::InvalidIndex.to_string(),
            "Invalid task number. Please provide a valid task number."
        );
    }
}
