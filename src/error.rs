use std::io;

use thiserror::Error;

use crate::core::commit::StoreError;
use crate::core::config::ConfigError;
use crate::core::setup::SetupError;

/// Top-level errors. Every variant ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
