//! Error types for vellum_graphics

use thiserror::Error;
use vellum_core::CoreError;

/// Errors that can occur while building elements and scenes
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// Error from the data substrate (encoding, table access)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A required parameter was passed a second time as an attribute
    #[error("{kind} got multiple values for attribute `{name}`")]
    DuplicateAttribute { kind: &'static str, name: String },

    /// Element data lacks a parameter its kind requires
    #[error("{kind} element data has no `{name}` attribute")]
    MissingAttribute { kind: &'static str, name: &'static str },

    /// Two scene elements were given the same key
    #[error("duplicate scene key `{0}`")]
    DuplicateKey(String),

    /// Element data carried a type tag no shape uses
    #[error("unknown element type `{0}`")]
    UnknownElementType(String),

    /// Element data carried no type tag
    #[error("element data has no `_t` type tag")]
    MissingElementType,
}

/// Result type for vellum_graphics operations
pub type Result<T> = std::result::Result<T, GraphicsError>;
