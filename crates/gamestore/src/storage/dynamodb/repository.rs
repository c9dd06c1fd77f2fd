//! DynamoDB repository implementation.
//!
//! Implements [`Repository`] from `gamestore_core::storage` on top of a
//! [`TableClient`].

use async_trait::async_trait;
use serde_json::Value;
use tracing::Dispatch;

use gamestore_core::storage::{RecordId, Repository, RepositoryError, Result, StoreAck};

use super::client::{DynamoDbTable, TableClient};
use super::conversions::{item_to_record, key_item, record_to_item};
use crate::config::{ConfigError, StorageConfig};

/// DynamoDB-based repository implementation.
///
/// Holds only immutable state, so concurrent calls need no coordination.
pub struct DynamoDbRepository<C = DynamoDbTable> {
    table: C,
    key_attribute: String,
    log_sink: Dispatch,
}

impl DynamoDbRepository<DynamoDbTable> {
    /// Creates a repository for the table described by `config`.
    pub async fn connect(config: &StorageConfig) -> Self {
        let table = DynamoDbTable::connect(config).await;

        tracing::info!(
            table = %config.table_name,
            endpoint = %config.target_display(),
            "DynamoDB repository ready"
        );

        Self::new(table, config.key_attribute.clone())
    }

    /// Creates a new repository from environment configuration.
    ///
    /// See [`StorageConfig::from_env`] for the recognized variables.
    pub async fn from_env() -> std::result::Result<Self, ConfigError> {
        let config = StorageConfig::from_env()?;
        Ok(Self::connect(&config).await)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        self.table.table_name()
    }
}

impl<C: TableClient> DynamoDbRepository<C> {
    /// Creates a repository over `table`, keyed by `key_attribute`.
    ///
    /// Logs go to the dispatcher that is current when this is called.
    pub fn new(table: C, key_attribute: impl Into<String>) -> Self {
        Self {
            table,
            key_attribute: key_attribute.into(),
            log_sink: tracing::dispatcher::get_default(Dispatch::clone),
        }
    }

    /// Routes this repository's log events to `log_sink`.
    pub fn with_log_sink(mut self, log_sink: Dispatch) -> Self {
        self.log_sink = log_sink;
        self
    }

    pub fn key_attribute(&self) -> &str {
        &self.key_attribute
    }
}

#[async_trait]
impl<C: TableClient> Repository for DynamoDbRepository<C> {
    async fn store(&self, id: &RecordId, data: &Value) -> Result<StoreAck> {
        let item = record_to_item(&self.key_attribute, id, data);
        self.table.put_item(item).await
    }

    async fn retrieve(&self, id: &RecordId) -> Result<Value> {
        tracing::dispatcher::with_default(&self.log_sink, || {
            tracing::debug!(id = %id, "Fetching item");
        });

        let key = key_item(&self.key_attribute, id);
        match self.table.get_item(key).await? {
            Some(item) => Ok(item_to_record(&self.key_attribute, &item)?.data),
            None => Err(RepositoryError::not_found(id.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use aws_sdk_dynamodb::types::AttributeValue;
    use serde_json::json;

    use super::*;
    use crate::logging::test_support::capture;
    use crate::logging::LogFormat;
    use crate::storage::dynamodb::conversions::test_support::{normalize_numbers, same_by_value};
    use crate::storage::dynamodb::conversions::Item;

    /// Table double keyed by the string value of the partition key.
    ///
    /// Stores numbers normalized the way DynamoDB does.
    struct FakeTable {
        key_attribute: String,
        items: Mutex<HashMap<String, Item>>,
    }

    impl FakeTable {
        fn new(key_attribute: &str) -> Self {
            Self {
                key_attribute: key_attribute.to_string(),
                items: Mutex::new(HashMap::new()),
            }
        }

        fn key_of(&self, item: &Item) -> String {
            item.get(&self.key_attribute)
                .and_then(|v| v.as_s().ok())
                .cloned()
                .expect("item must carry the partition key")
        }

        fn raw(&self, key: &str) -> Option<Item> {
            self.items.lock().unwrap().get(key).cloned()
        }

        fn insert_raw(&self, key: &str, item: Item) {
            self.items.lock().unwrap().insert(key.to_string(), item);
        }
    }

    #[async_trait]
    impl TableClient for FakeTable {
        async fn put_item(&self, item: Item) -> Result<StoreAck> {
            let key = self.key_of(&item);
            self.items.lock().unwrap().insert(key, normalize_numbers(&item));
            Ok(StoreAck::new().with_request_id("FAKE-REQUEST"))
        }

        async fn get_item(&self, key: Item) -> Result<Option<Item>> {
            let key = self.key_of(&key);
            Ok(self.items.lock().unwrap().get(&key).cloned())
        }
    }

    /// Table double that fails every request.
    struct UnavailableTable;

    #[async_trait]
    impl TableClient for UnavailableTable {
        async fn put_item(&self, _item: Item) -> Result<StoreAck> {
            Err(RepositoryError::StorageUnavailable(
                "Throughput exceeded".to_string(),
            ))
        }

        async fn get_item(&self, _key: Item) -> Result<Option<Item>> {
            Err(RepositoryError::StorageUnavailable(
                "Throughput exceeded".to_string(),
            ))
        }
    }

    fn repo() -> DynamoDbRepository<FakeTable> {
        DynamoDbRepository::new(FakeTable::new("game_id"), "game_id")
    }

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_store_then_retrieve_game() {
        let repo = repo();

        repo.store(&id("game-42"), &json!({"score": 10}))
            .await
            .unwrap();

        let data = repo.retrieve(&id("game-42")).await.unwrap();
        assert_eq!(data, json!({"score": 10}));
    }

    #[tokio::test]
    async fn test_round_trip_preserves_payload_shapes() {
        let repo = repo();
        let payloads = [
            json!(null),
            json!(true),
            json!(-7),
            json!(3.75),
            json!("plain string"),
            json!([1, "two", [3], {"four": 4}]),
            json!({"board": [[0, 1], [1, 0]], "turn": "x", "over": false}),
        ];

        for (i, payload) in payloads.iter().enumerate() {
            let key = id(&format!("game-{i}"));
            repo.store(&key, payload).await.unwrap();
            assert_eq!(&repo.retrieve(&key).await.unwrap(), payload);
        }
    }

    #[tokio::test]
    async fn test_whole_number_floats_come_back_equal_by_value() {
        let repo = repo();
        let payload = json!({"score": 10.0, "bonus": 2.50, "history": [1.0, 0.5]});

        repo.store(&id("game-1"), &payload).await.unwrap();
        let data = repo.retrieve(&id("game-1")).await.unwrap();

        assert_eq!(data, json!({"score": 10, "bonus": 2.5, "history": [1, 0.5]}));
        assert!(same_by_value(&data, &payload));
    }

    #[tokio::test]
    async fn test_retrieve_missing_id_is_not_found() {
        let repo = repo();

        let result = repo.retrieve(&id("missing-id")).await;
        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                id: "missing-id".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_record() {
        let repo = repo();

        repo.store(&id("game-1"), &json!({"score": 1})).await.unwrap();
        repo.store(&id("game-1"), &json!({"score": 2})).await.unwrap();

        let data = repo.retrieve(&id("game-1")).await.unwrap();
        assert_eq!(data, json!({"score": 2}));
    }

    #[tokio::test]
    async fn test_retrieve_twice_returns_same_data() {
        let repo = repo();
        repo.store(&id("game-1"), &json!({"players": ["alice"]}))
            .await
            .unwrap();

        let first = repo.retrieve(&id("game-1")).await.unwrap();
        let second = repo.retrieve(&id("game-1")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_store_writes_key_and_data_attributes() {
        let repo = repo();

        let ack = repo
            .store(&id("game-42"), &json!({"score": 10}))
            .await
            .unwrap();
        assert_eq!(ack.request_id(), Some("FAKE-REQUEST"));

        let item = repo.table.raw("game-42").unwrap();
        assert_eq!(item.get("game_id").unwrap().as_s().unwrap(), "game-42");
        assert!(item.get("data").unwrap().is_m());
    }

    #[tokio::test]
    async fn test_custom_key_attribute() {
        let repo = DynamoDbRepository::new(FakeTable::new("id"), "id");
        assert_eq!(repo.key_attribute(), "id");

        repo.store(&id("game-9"), &json!(9)).await.unwrap();

        assert!(repo.table.raw("game-9").unwrap().contains_key("id"));
        assert_eq!(repo.retrieve(&id("game-9")).await.unwrap(), json!(9));
    }

    #[tokio::test]
    async fn test_retrieve_undecodable_item_is_serialization_error() {
        let repo = repo();
        let mut item = HashMap::new();
        item.insert(
            "game_id".to_string(),
            AttributeValue::S("game-1".to_string()),
        );
        repo.table.insert_raw("game-1", item);

        let result = repo.retrieve(&id("game-1")).await;
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let repo = DynamoDbRepository::new(UnavailableTable, "game_id");

        let stored = repo.store(&id("game-1"), &json!(1)).await;
        assert!(matches!(
            stored,
            Err(RepositoryError::StorageUnavailable(_))
        ));

        let retrieved = repo.retrieve(&id("game-1")).await;
        assert!(matches!(
            retrieved,
            Err(RepositoryError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_retrieve_logs_lookup_before_querying() {
        let (dispatch, logs) = capture(LogFormat::Json);
        let repo = DynamoDbRepository::new(UnavailableTable, "game_id").with_log_sink(dispatch);

        // The lookup is logged even though the backend then fails.
        let _ = repo.retrieve(&id("game-42")).await;

        let line: serde_json::Value = serde_json::from_str(logs.contents().trim()).unwrap();
        assert_eq!(line["level"], "DEBUG");
        assert_eq!(line["fields"]["message"], "Fetching item");
        assert_eq!(line["fields"]["id"], "game-42");
    }

    #[tokio::test]
    async fn test_store_does_not_log() {
        let (dispatch, logs) = capture(LogFormat::Pretty);
        let repo = repo().with_log_sink(dispatch);

        repo.store(&id("game-1"), &json!(1)).await.unwrap();

        assert!(logs.contents().is_empty());
    }
}
