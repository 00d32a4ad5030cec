//! Error types.
//!
//! Lenient conversion never fails. These errors surface only from the
//! strict entry points and from theme document loading.

use std::path::PathBuf;

/// Error returned by strict style-value conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The value has no leading numeric portion.
    #[error("invalid number '{value}'")]
    InvalidNumber { value: String },
    /// A `clamp(` expression that does not have exactly three arguments.
    #[error("malformed clamp expression '{value}'")]
    MalformedClamp { value: String },
    /// A `vw` argument whose coefficient cannot be read.
    #[error("invalid viewport unit '{value}'")]
    InvalidViewportUnit { value: String },
    /// A boolean or nested object where a dimension was expected.
    #[error("property '{property}' expects a dimension, found {found}")]
    UnsupportedValue { property: String, found: &'static str },
}

/// Result type for strict conversion.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error returned when loading a theme override document.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document is not valid YAML or does not match the override schema.
    #[error("invalid theme document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document could not be read from disk.
    #[error("failed to read theme file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
