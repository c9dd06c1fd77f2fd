//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`Repository`] trait
//! defined in `gamestore_core::storage`. Backends are selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): Amazon DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory backend for tests and local development
//!
//! # Examples
//!
//! Build with DynamoDB only:
//! ```bash
//! cargo build -p gamestore --no-default-features --features dynamodb
//! ```
//!
//! [`Repository`]: gamestore_core::storage::Repository

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p gamestore --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbRepository, DynamoDbTable, TableClient};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
