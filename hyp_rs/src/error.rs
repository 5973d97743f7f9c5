//! Utilities for demo application error handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logger::LoggerError;

/// Error that can happen when the application starts.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigError),

    #[error("logger initialization failure: {0}")]
    Logger(#[from] LoggerError),
}
