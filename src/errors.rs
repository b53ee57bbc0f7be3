//! Unified application error type.
//! Every layer (db, repository, core, cli) returns AppError so the CLI can
//! report failures the same way everywhere.

use std::io;
use thiserror::Error;

/// Coarse error taxonomy shown to callers that only care about the class
/// of failure, not the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
    Config,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("No entry found with id {0}")]
    NotFound(i64),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Database integrity check failed: {0}")]
    Integrity(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Config(_) | AppError::ConfigParse(_) => ErrorKind::Config,
            AppError::Db(_)
            | AppError::Io(_)
            | AppError::Csv(_)
            | AppError::Json(_)
            | AppError::Migration(_)
            | AppError::Export(_)
            | AppError::Integrity(_) => ErrorKind::Persistence,
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
