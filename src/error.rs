//! Error type for the outer layers of the audit engine.
//!
//! The scoring and context functions are total and never return errors.
//! Failures only arise where the engine touches the outside world: reading or
//! writing audit files, parsing imports and configuration, interpreting
//! command-line input, and store commands that address missing entries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fairness-audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    /// File system errors with the path that failed
    #[error("File system error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON (syntax, not shape)
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON that parsed but does not have the shape of an audit export
    #[error("Invalid audit file: {0}")]
    InvalidImport(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Component key not in c1..c4
    #[error("Unknown component '{0}' (expected one of c1, c2, c3, c4)")]
    UnknownComponent(String),

    /// Store command addressed an entry that does not exist
    #[error("{collection} index {index} out of range (length {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// Learn Mode data is read-only
    #[error("Cannot edit the case study in learn mode; switch to audit mode first")]
    ReadOnly,
}

impl AuditError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn index_out_of_range(collection: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            index,
            len,
        }
    }

    /// Whether the user can fix this by editing their input.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, AuditError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
