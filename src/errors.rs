//! Unified application error type.
//! All modules (core, cli, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source loading
    // ---------------------------
    #[error("could not retrieve {name}: {reason}")]
    Retrieval { name: String, reason: String },

    #[error("could not parse {name}: {reason}")]
    Parse { name: String, reason: String },

    /// A whole load cycle failed; carries the user-facing message.
    #[error("{0}")]
    LoadFailed(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("No booking with uuid {0}")]
    BookingNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn retrieval(name: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Retrieval {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(name: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Parse {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
