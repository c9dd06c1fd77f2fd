//! Table-scoped DynamoDB access.
//!
//! [`TableClient`] is the narrow contract the repository consumes: one put and
//! one get against a single table. [`DynamoDbTable`] implements it over the AWS
//! SDK client.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::RequestId;
use aws_sdk_dynamodb::Client;

use gamestore_core::storage::{Result, StoreAck};

use super::conversions::Item;
use super::error::{map_get_item_error, map_put_item_error};
use crate::config::StorageConfig;

/// Backing store contract: single-item put and get on one table.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Writes `item`, replacing any item with the same key.
    async fn put_item(&self, item: Item) -> Result<StoreAck>;

    /// Reads the item stored under `key`, if any.
    async fn get_item(&self, key: Item) -> Result<Option<Item>>;
}

/// A DynamoDB table bound to a client.
#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
}

impl DynamoDbTable {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds an SDK client from `config` and binds it to the configured table.
    pub async fn connect(config: &StorageConfig) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the AWS SDK default provider chain.
pub async fn create_client(config: &StorageConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

#[async_trait]
impl TableClient for DynamoDbTable {
    async fn put_item(&self, item: Item) -> Result<StoreAck> {
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        let ack = StoreAck::new();
        Ok(match output.request_id() {
            Some(request_id) => ack.with_request_id(request_id),
            None => ack,
        })
    }

    async fn get_item(&self, key: Item) -> Result<Option<Item>> {
        // Strongly consistent so a read right after a write sees it.
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(output.item)
    }
}
