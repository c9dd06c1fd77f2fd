//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::Dispatch;

use gamestore_core::storage::{RecordId, Repository, RepositoryError, Result, StoreAck};

/// In-memory storage backend for testing.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<RecordId, Value>>>,
    log_sink: Dispatch,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    ///
    /// Logs go to the dispatcher that is current when this is called.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            log_sink: tracing::dispatcher::get_default(Dispatch::clone),
        }
    }

    /// Routes this repository's log events to `log_sink`.
    pub fn with_log_sink(mut self, log_sink: Dispatch) -> Self {
        self.log_sink = log_sink;
        self
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn store(&self, id: &RecordId, data: &Value) -> Result<StoreAck> {
        let mut items = self.items.write().await;
        items.insert(id.clone(), data.clone());
        Ok(StoreAck::new())
    }

    async fn retrieve(&self, id: &RecordId) -> Result<Value> {
        tracing::dispatcher::with_default(&self.log_sink, || {
            tracing::debug!(id = %id, "Fetching item");
        });

        let items = self.items.read().await;
        items
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id.as_str()))
    }
}
