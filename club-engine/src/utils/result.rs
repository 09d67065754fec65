//! Unified Result Types

use super::AppError;

/// Application-level Result type
///
/// Used by the driver: reading input, replaying, writing the report
pub type AppResult<T> = Result<T, AppError>;
