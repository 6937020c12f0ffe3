//! Error types for vellum_core

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data substrate
#[derive(Error, Debug)]
pub enum CoreError {
    /// A value could not be encoded to or decoded from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Packed data did not carry the `data:` prefix
    #[error("not packed data: expected a `data:` prefix")]
    NotPacked,

    /// A configuration file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be parsed
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value is outside its supported range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Two rows were given the same key
    #[error("duplicate row key `{0}`")]
    DuplicateRow(String),

    /// No row exists for the key
    #[error("unknown row `{0}`")]
    UnknownRow(String),

    /// The table has no field with this name
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A row does not carry one value per field
    #[error("row `{key}` has {actual} values, table has {expected} fields")]
    RowShape {
        key: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for vellum_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
