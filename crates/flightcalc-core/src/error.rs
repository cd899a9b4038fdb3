//! Error types for the calculator core

use thiserror::Error;

/// Errors that can occur while loading configuration or driving the calculator
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown payload item: '{0}'")]
    UnknownPayloadItem(String),

    #[error("Unknown battery option: '{0}'")]
    UnknownBattery(String),

    #[error("Duplicate catalog id: '{0}'")]
    DuplicateId(String),

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unknown mass unit: '{0}'")]
    UnknownUnit(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CalcError>;
