use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item {id} not found")]
    NotFound { id: String },
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

impl RepositoryError {
    /// Creates a `NotFound` error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Returns true if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
