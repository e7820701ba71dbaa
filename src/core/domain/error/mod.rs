use thiserror::Error;

/// The main error type for bridge operations.
///
/// This enum represents everything that can go wrong between receiving a
/// chat command and answering it: transport failures against the printer
/// API, unexpected HTTP statuses, structurally wrong response bodies, and
/// configuration validation failures at build time.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The printer API could not be reached (timeout, refused or reset
    /// connection, DNS failure).
    #[error("Network error: {0}")]
    Network(String),

    /// The printer API answered with a non-success HTTP status where a
    /// body was expected.
    #[error("Printer API returned HTTP {0}")]
    Http(u16),

    /// The response body was not parseable as the expected structure.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A configuration value failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Specialized error type for configuration validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A validation failure for a specific configuration field.
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// A format/syntax violation.
    #[error("Format error: {0}")]
    Format(String),

    /// A violation of a domain constraint.
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a BridgeError
pub type BridgeResult<T> = Result<T, BridgeError>;
