//! Error Handling Infrastructure
//!
//! This module defines the single error type used throughout staffdesk.
//! Every variant maps to a stable error code that is attached to log events.
//!
//! # Error Categories
//! - `ConnectionFailed`: Opening or closing the database connection failed
//! - `QueryFailed`: A statement was rejected or failed while executing
//! - `InvalidInput`: Operator input or result data could not be used
//! - `PromptFailed`: The terminal prompt machinery itself failed
//! - `EngineError`: Engine-specific driver errors
//! - `Io`: Writing to the output stream failed
//!
//! Whether an error terminates the process is decided by the menu action that
//! produced it (see [`crate::menu::FailurePolicy`]), never by the error itself.

use thiserror::Error;

/// Main error type for staffdesk operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Statement execution failed
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Invalid input or unusable data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Interactive prompt failed (terminal closed, interrupted, script exhausted)
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// Engine-specific database error
    #[error("Engine error ({engine}): {detail}")]
    EngineError { engine: String, detail: String },

    /// Output stream could not be written
    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// Stable error code string for log events
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::QueryFailed(_) => "QUERY_FAILED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::PromptFailed(_) => "PROMPT_FAILED",
            Self::EngineError { .. } => "ENGINE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a prompt failed error
    pub fn prompt_failed(message: impl Into<String>) -> Self {
        Self::PromptFailed(message.into())
    }

    /// Create an engine-specific error
    pub fn engine_error(engine: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::EngineError { engine: engine.into(), detail: detail.into() }
    }
}

/// Result type alias for staffdesk operations
pub type Result<T> = std::result::Result<T, TrackerError>;
