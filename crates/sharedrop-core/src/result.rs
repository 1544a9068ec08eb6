//! Convenience result type alias for ShareDrop.

use crate::error::AppError;

/// A specialized `Result` type for ShareDrop operations.
pub type AppResult<T> = Result<T, AppError>;
