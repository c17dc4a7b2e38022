//! Error types for training, inference and dataset loading

use thiserror::Error;

/// Errors returned by the network and the dataset loader
#[derive(Debug, Error)]
pub enum NetError {
    #[error("Configuration mismatch: {what} expected {expected}, got {actual}")]
    ConfigurationMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Network has no trained parameters")]
    UninitializedParameters,

    #[error("Invalid axis {0}: expected 0 (columns) or 1 (rows)")]
    InvalidAxis(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetError>;
