//! Error types for the honeypot service.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Conversation store errors.
///
/// The in-memory backend never produces these; they exist for backends
/// that can fail (disk, network).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
