//! Error types and exit codes for taxograph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown identifier, cyclic or malformed source)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown identifier, malformed source (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during taxograph operations
#[derive(Error, Debug)]
pub enum TaxoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown identifier: {id}")]
    UnknownIdentifier { id: String },

    #[error("cycle detected at node: {id}")]
    CycleDetected { id: String },

    #[error("malformed source document: {reason}")]
    SourceFormat { reason: String },

    // Generic failures (exit code 1)
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TaxoError {
    /// Create an error for an identifier absent from the node table
    pub fn unknown_identifier(id: impl Into<String>) -> Self {
        TaxoError::UnknownIdentifier { id: id.into() }
    }

    /// Attach the offending path to a read failure
    pub fn read_file(path: &Path, source: std::io::Error) -> Self {
        TaxoError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an error for a malformed source document
    pub fn source_format(reason: impl std::fmt::Display) -> Self {
        TaxoError::SourceFormat {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TaxoError::UnknownFormat(_) | TaxoError::UsageError(_) => ExitCode::Usage,

            TaxoError::UnknownIdentifier { .. }
            | TaxoError::CycleDetected { .. }
            | TaxoError::SourceFormat { .. } => ExitCode::Data,

            TaxoError::ReadFile { .. }
            | TaxoError::Json(_)
            | TaxoError::Toml(_)
            | TaxoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TaxoError::UnknownFormat(_) => "unknown_format",
            TaxoError::UsageError(_) => "usage_error",
            TaxoError::UnknownIdentifier { .. } => "unknown_identifier",
            TaxoError::CycleDetected { .. } => "cycle_detected",
            TaxoError::SourceFormat { .. } => "source_format",
            TaxoError::ReadFile { .. } => "io_error",
            TaxoError::Json(_) => "json_error",
            TaxoError::Toml(_) => "toml_error",
            TaxoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for taxograph operations
pub type Result<T> = std::result::Result<T, TaxoError>;
