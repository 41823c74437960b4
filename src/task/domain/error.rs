//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// No further task identifier can be assigned.
    #[error("task identifier space exhausted")]
    IdSpaceExhausted,

    /// Story points must be finite numbers.
    #[error("story points must be a finite number")]
    NonFinitePoints,
}

/// Error returned while parsing a status, priority, or type label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task {field}: {value}")]
pub struct ParseClassificationError {
    /// Name of the classification being parsed.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseClassificationError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}
