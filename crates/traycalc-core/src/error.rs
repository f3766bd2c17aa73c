//! Error types for the non-arithmetic parts of the tray calculator.
//!
//! Arithmetic never fails: divide-by-zero and unparsable operands become
//! `Infinity`/`NaN` values that are displayed as-is.

use thiserror::Error;

/// Errors raised by the registry, operator parsing and configuration.
#[derive(Debug, Error)]
pub enum TrayError {
    #[error("Item '{id}' already registered in category '{category}'")]
    DuplicateItem { category: String, id: String },
    #[error("No item '{id}' in category '{category}'")]
    UnknownItem { category: String, id: String },
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tray operations.
pub type TrayResult<T> = Result<T, TrayError>;

impl From<serde_json::Error> for TrayError {
    fn from(err: serde_json::Error) -> Self {
        TrayError::Config(err.to_string())
    }
}
