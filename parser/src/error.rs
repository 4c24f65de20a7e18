//! Error types for FORMAT-1 file handling.
//!
//! Parsing itself never fails. Errors come from reading input, serializing
//! output, and from strict mode when it finds problems.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or reporting an inventory.
#[derive(Debug, Error)]
pub enum Format1Error {
    /// The input file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Strict mode found irregularities the lenient parser tolerated.
    #[error("strict check failed with {} problem(s): {}", .0.len(), .0.join("; "))]
    Strict(Vec<String>),
}

/// Convenience alias for results with [`Format1Error`].
pub type Result<T> = std::result::Result<T, Format1Error>;
