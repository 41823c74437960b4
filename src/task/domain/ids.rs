//! Identifier types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique positive identifier for a task within the collection.
///
/// Identifiers are assigned by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// The first identifier handed out by an empty collection.
    pub const FIRST: Self = Self(1);

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, TaskDomainError> {
        if value == 0 {
            return Err(TaskDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdSpaceExhausted`] when no larger
    /// identifier is representable.
    pub const fn next(self) -> Result<Self, TaskDomainError> {
        match self.0.checked_add(1) {
            Some(value) => Ok(Self(value)),
            None => Err(TaskDomainError::IdSpaceExhausted),
        }
    }

    /// Returns the identifier a new task receives given the existing ones.
    ///
    /// This is one past the largest identifier, or [`TaskId::FIRST`] when
    /// there are none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdSpaceExhausted`] when the largest
    /// identifier is `u64::MAX`.
    pub fn next_after(ids: impl IntoIterator<Item = Self>) -> Result<Self, TaskDomainError> {
        ids.into_iter().max().map_or(Ok(Self::FIRST), Self::next)
    }
}

impl TryFrom<u64> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
