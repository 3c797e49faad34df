//! Error types for Stratus

use thiserror::Error;

/// Result type alias using Stratus Error
pub type Result<T> = std::result::Result<T, Error>;

/// Stratus error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource not found: {kind} {id}")]
    NotFound { kind: String, id: String },

    #[error("Resource already exists: {kind} {id}")]
    AlreadyExists { kind: String, id: String },

    #[error("Cannot delete {kind} {id}: dependent entities still attached")]
    DeleteConflict { kind: String, id: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Operation {operation} is not supported for {resource_type}")]
    Unsupported {
        resource_type: String,
        operation: String,
    },

    #[error("Malformed ARN: {0}")]
    MalformedArn(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn already_exists(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn unsupported(resource_type: impl Into<String>, operation: impl Into<String>) -> Self {
        Error::Unsupported {
            resource_type: resource_type.into(),
            operation: operation.into(),
        }
    }

    /// True when the error indicates the referenced resource is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
