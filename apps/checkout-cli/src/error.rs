//! # Application Error Type
//!
//! What can end a checkout session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  ValidationError ──► printed, prompt repeated (never reaches here)     │
//! │                                                                         │
//! │  ConfigError     ──► AppError::Config  ──► exit code 1 at startup      │
//! │  stdin closed    ──► AppError::InputClosed                             │
//! │  stdout broken   ──► AppError::Io                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not serialize receipt: {0}")]
    Json(#[from] serde_json::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[error("Input closed while waiting for {0}")]
    InputClosed(String),
}

pub type AppResult<T> = Result<T, AppError>;
