//! Error types for gradebook-core.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Top-level error type for core operations.
///
/// The HTTP layer maps these onto status codes: `Validation` and
/// `DuplicateId` become 400, the not-found variants 404, and `Store` 500.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// No student with this id.
    #[error("student not found: {0}")]
    StudentNotFound(String),

    /// No subject with this id.
    #[error("subject not found: {0}")]
    SubjectNotFound(String),

    /// Create would collide with an existing record.
    #[error("id already exists: {0}")]
    DuplicateId(String),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] gradebook_store::StoreError),
}
