//! Task index value object
//!
//! A 1-based position in the task list, as typed by the user.

use std::{fmt, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A positive, 1-based task number
///
/// Only syntactic validity is guaranteed; whether the index refers to an
/// existing task is decided by the task list at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskIndex(NonZeroUsize);

impl TaskIndex {
    /// Create an index from a 1-based position
    pub fn new(position: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(position)
            .map(Self)
            .ok_or(DomainError::InvalidIndex)
    }

    /// Create an index from a 0-based storage offset
    pub const fn from_zero_based(offset: usize) -> Self {
        match NonZeroUsize::new(offset.saturating_add(1)) {
            Some(n) => Self(n),
            None => Self(NonZeroUsize::MAX),
        }
    }

    /// The 1-based position shown to the user
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based offset used for storage
    pub const fn to_zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskIndex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position = s.parse::<usize>().map_err(|_| DomainError::InvalidIndex)?;
        Self::new(position)
    }
}
