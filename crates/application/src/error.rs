//! Application-level errors

use domain::{DomainError, TaskIndex};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input line could not be interpreted
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Task number is beyond the end of the list
    #[error("Task number {index} does not exist. You have {count} tasks in the list.")]
    TaskNotFound {
        /// Requested 1-based position
        index: TaskIndex,
        /// Number of tasks in the list
        count: usize,
    },

    /// Loading or saving the task list failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApplicationError {
    /// Create a task-not-found error
    pub const fn task_not_found(index: TaskIndex, count: usize) -> Self {
        Self::TaskNotFound { index, count }
    }

    /// Check if this error was caused by the user's input
    ///
    /// User errors are reported and the user is prompted again.
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::TaskNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::EmptyDescription);
        assert_eq!(err.to_string(), "Description cannot be empty.");
        assert!(err.is_user_error());
    }

    #[test]
    fn task_not_found_message() {
        let err = ApplicationError::task_not_found(TaskIndex::new(5).unwrap(), 2);
        assert_eq!(
            err.to_string(),
            "Task number 5 does not exist. You have 2 tasks in the list."
        );
        assert!(err.is_user_error());
    }

    #[test]
    fn storage_error_is_not_user_error() {
        let err = ApplicationError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
        assert!(!err.is_user_error());
    }
}
