//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `gamestore_core::storage`.
//! Nothing here is retried; every failure reaches the caller.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use gamestore_core::storage::RepositoryError;

/// Error code DynamoDB returns for items it cannot accept.
///
/// Covers oversized items and items whose key does not match the table's key
/// schema, such as a misconfigured `key_attribute`.
const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    classify_get_item_error(err.into_service_error())
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A `ValidationException` becomes `Serialization`, including key schema
/// mismatches caused by configuration. The same mismatch on GetItem has no
/// dedicated mapping and surfaces as `StorageUnavailable`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    classify_put_item_error(err.into_service_error())
}

fn classify_get_item_error(err: GetItemError) -> RepositoryError {
    match err {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::StorageUnavailable("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::StorageUnavailable("Throughput exceeded".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::StorageUnavailable("Request limit exceeded".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::StorageUnavailable("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::StorageUnavailable(format!("GetItem failed: {:?}", err)),
    }
}

fn classify_put_item_error(err: PutItemError) -> RepositoryError {
    match err {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::StorageUnavailable("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::StorageUnavailable("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::StorageUnavailable("Request limit exceeded".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::StorageUnavailable("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::StorageUnavailable("Transaction conflict".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::StorageUnavailable("DynamoDB internal server error".to_string())
        }
        err if err.code() == Some(VALIDATION_EXCEPTION) => RepositoryError::Serialization(
            err.message()
                .unwrap_or("Item rejected by DynamoDB validation")
                .to_string(),
        ),
        err => RepositoryError::StorageUnavailable(format!("PutItem failed: {:?}", err)),
    }
}
