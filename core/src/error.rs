//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`ConvertConfig`](crate::ConvertConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Root command name is empty or contains unsupported characters.
    #[error("invalid root command name: {0:?}")]
    InvalidRootName(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
