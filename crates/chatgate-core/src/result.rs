//! Convenience result type alias for Chatgate.

use crate::error::AppError;

/// A specialized `Result` type for Chatgate operations.
pub type AppResult<T> = Result<T, AppError>;
