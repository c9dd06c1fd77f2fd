//! In-memory storage backend for testing.
//!
//! Stores payloads in a `HashMap` wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; data is lost when the last clone of the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamestore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.store(&id, &serde_json::json!({"score": 10})).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
