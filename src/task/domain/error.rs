//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors returned when task input fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The trimmed title exceeds the configured maximum.
    #[error("task title is too long: {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Configured maximum in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The trimmed description exceeds the configured maximum.
    #[error("task description is too long: {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Configured maximum in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a task identifier from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
