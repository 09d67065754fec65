//! 统一错误处理
//!
//! Failures of the run itself. Club rule violations are not errors here; they
//! end up in the report as code 13 lines.

use crate::input::InputError;
use std::path::PathBuf;
use thiserror::Error;

/// 应用错误枚举
#[derive(Debug, Error)]
pub enum AppError {
    /// Input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is malformed (fatal, no report)
    #[error(transparent)]
    Input(#[from] InputError),

    /// Report could not be written
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// The malformed input, if that is why the run failed
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            AppError::Input(e) => Some(e),
            _ => None,
        }
    }
}
