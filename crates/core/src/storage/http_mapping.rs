//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Host web applications use this to turn adapter failures into responses
//! without matching on backend details.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `InvalidId` -> 400 (Bad Request)
/// - `Serialization` -> 422 (Unprocessable Entity)
/// - `StorageUnavailable` -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use gamestore_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("game-42");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidId(_) => 400,
        RepositoryError::Serialization(_) => 422,
        RepositoryError::StorageUnavailable(_) => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::not_found("missing-id");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_invalid_id_maps_to_400() {
        let error = RepositoryError::InvalidId("id must not be empty".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_serialization_maps_to_422() {
        let error = RepositoryError::Serialization("item too large".to_string());
        assert_eq!(repository_error_to_status_code(&error), 422);
    }

    #[test]
    fn test_storage_unavailable_maps_to_503() {
        let error = RepositoryError::StorageUnavailable("throughput exceeded".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }
}
