//! Key-value persistence adapters.
//!
//! Backends implement [`gamestore_core::storage::Repository`] and are selected
//! through feature flags:
//!
//! - `dynamodb` (default): Amazon DynamoDB via `aws-sdk-dynamodb`
//! - `inmemory` (default): process-local storage for tests and development

pub mod config;
pub mod logging;
pub mod storage;

pub use config::{ConfigError, StorageConfig};
pub use gamestore_core::storage::{
    Record, RecordId, Repository, RepositoryError, RepositoryExt, StoreAck,
};
