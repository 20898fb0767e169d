//! Error types for the compliance core

use std::path::PathBuf;
use thiserror::Error;

/// Compliance engine error
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// Rule document was readable but is not a usable rule mapping
    #[error("Malformed rule document {}: {reason}", path.display())]
    MalformedRules {
        /// Location of the rule document
        path: PathBuf,
        /// Parser or structural failure
        reason: String,
    },

    /// Engine configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record document is not a JSON object
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, ComplianceError>;
