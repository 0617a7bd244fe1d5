//! Result type aliases for Tasklane.

use crate::TasklaneError;

/// A specialized `Result` type for Tasklane operations.
pub type TasklaneResult<T> = Result<T, TasklaneError>;
