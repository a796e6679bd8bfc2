//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Required fields were absent from the input.
    #[error("Validation failed: missing {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Store Adapter errors.
///
/// A missing record is never an error: lookups return `None` and deletes of
/// unknown ids succeed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Stored item could not be decoded: {0}")]
    Decode(String),
}
