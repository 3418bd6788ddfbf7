//! Error types for paginate
//!
//! Page navigation itself never fails: out-of-range page numbers are clamped
//! and unparseable request parameters fall back to the first page. Errors
//! only arise from invalid configuration or from the collection adapter.

use std::fmt;
use thiserror::Error;

/// The main error type for paginate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration is unusable
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A single config field holds an invalid value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field name
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// YAML config could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON config could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Collection Adapter Errors
    // ============================================================================
    /// The item source failed to count or fetch items
    #[error("Item source error: {message}")]
    Source {
        /// Description of the failure
        message: String,
    },

    /// Arbitrary error raised by an item source
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an item source error
    pub fn item_source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Check if this error comes from the item source rather than from configuration
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::Source { .. } | Error::Anyhow(_))
    }
}

/// Result type alias for paginate
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for turning foreign errors inside an item source into [`Error::Source`]
pub trait ResultExt<T> {
    /// Wrap the error as a source error prefixed with `message`
    fn source_context(self, message: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::source_context`], building the message lazily
    fn with_source_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn source_context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::item_source(format!("{}: {}", message.into(), e)))
    }

    fn with_source_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::item_source(format!("{}: {}", f(), e)))
    }
}
