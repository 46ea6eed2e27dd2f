//! Unified application error type.
//! All modules (store, core, cli, tui) return AppError to keep the error
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
    // Storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: String, end: String },

    // ---------------------------
    // Timer errors
    // ---------------------------
    #[error("A timer is already running for task '{0}'. Stop it first.")]
    TimerAlreadyRunning(String),

    #[error("Timer not started!")]
    TimerNotRunning,

    #[error("Please enter both task and category.")]
    MissingTaskOrCategory,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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

pub type AppResult<T> = Result<T, AppError>;
