//! Error types for the cart engine

use thiserror::Error;

/// Cart persistence errors
///
/// The only failure surface of the engine. State transitions themselves
/// never fail; storage errors are reported here and handled (logged and
/// swallowed) by the manager.
#[derive(Debug, Error)]
pub enum CartError {
    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted cart data could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cart operations
pub type Result<T> = std::result::Result<T, CartError>;
