//! Error types for configuration validation.

use thiserror::Error;

/// Errors raised while validating a generator configuration.
///
/// All of these are fatal and abort a run before any CSV row is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The package-size mapping lacks the universal fallback bucket.
    #[error("package size mapping must contain an \"{0}\" entry")]
    MissingFallbackBucket(&'static str),

    /// The configured delimiter is not a single ASCII character.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
