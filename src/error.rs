//! Error types for batchctl
//!
//! Library code uses `crate::error::Result<T>` which returns `BatchctlError`.
//! CLI code uses `anyhow::Result<T>` for top-level error handling; the
//! conversion happens at the CLI boundary and preserves error chains.
//!
//! The cost estimator itself defines no error conditions: a workload that no
//! pricing-table entry can satisfy falls back to the largest class instead of
//! failing. Errors here come from configuration loading and from the AWS
//! collaborator wrappers (S3, SSM, Secrets Manager, CloudWatch).

use thiserror::Error;

/// Main error type for batchctl
#[derive(Error, Debug)]
pub enum BatchctlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("SSM error: {0}")]
    Ssm(String),

    #[error("Secrets Manager error: {0}")]
    SecretsManager(String),

    #[error("CloudWatch error: {0}")]
    CloudWatch(String),

    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BatchctlError>;

// AWS SDK v1 errors are complex; modules map them to the string variants
// above manually, keeping the service name in the message.
