//! DynamoDB storage backend implementation.
//!
//! Each record is one item: the id under the partition key attribute
//! (`game_id` by default) and the payload under `data`, encoded with
//! DynamoDB's native attribute types.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::{create_client, DynamoDbTable, TableClient};
pub use conversions::{Item, DATA_ATTRIBUTE};
pub use repository::DynamoDbRepository;
