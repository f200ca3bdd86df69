//! Error types for pixelflow.
//!
//! Uses thiserror for structured errors. Filter arithmetic never fails, so
//! the only core failures are unknown registry names and buffers whose shape
//! does not match their dimensions.

use thiserror::Error;

/// Top-level error type for pixelflow.
///
/// Encompasses all error categories and enables automatic conversion
/// between the specific error types.
#[derive(Error, Debug)]
pub enum PixelflowError {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Other(String),
}

/// Errors raised by the registry and the image processor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("No filter registered under '{name}'")]
    NotFound { name: String },

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },
}

/// Errors from loading configuration and filter specs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid filter spec JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid filter spec: {0}")]
    InvalidSpec(String),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl FilterError {
    /// Build a `NotFound` error for `name`.
    pub fn not_found(name: impl Into<String>) -> Self {
        FilterError::NotFound { name: name.into() }
    }

    /// Build a `MalformedInput` error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        FilterError::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Check if this error came from a bad buffer rather than a lookup.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, FilterError::MalformedInput { .. })
    }
}

/// Result type alias for pixelflow operations.
pub type PixelflowResult<T> = Result<T, PixelflowError>;

/// Result type alias for registry and processing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
