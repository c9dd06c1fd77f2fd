use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{RecordId, Result, StoreAck};

/// Key-value persistence for opaque payloads.
///
/// Implementations perform exactly one backend request per call and never
/// retry. Concurrent writes to the same id resolve as last-write-wins at the
/// backend.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Upserts `data` under `id`, replacing any previous record.
    ///
    /// Never fails with `NotFound`.
    async fn store(&self, id: &RecordId, data: &Value) -> Result<StoreAck>;

    /// Returns the payload stored under `id`.
    ///
    /// Fails with `NotFound` when no record exists for `id`.
    async fn retrieve(&self, id: &RecordId) -> Result<Value>;
}

/// Typed helpers on top of [`Repository`].
#[async_trait]
pub trait RepositoryExt: Repository {
    /// Encodes `data` as JSON and stores it.
    async fn store_as<T>(&self, id: &RecordId, data: &T) -> Result<StoreAck>
    where
        T: Serialize + Sync + ?Sized,
    {
        let value = serde_json::to_value(data)?;
        self.store(id, &value).await
    }

    /// Retrieves the payload and decodes it into `T`.
    async fn retrieve_as<T>(&self, id: &RecordId) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let value = self.retrieve(id).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl<R: Repository + ?Sized> RepositoryExt for R {}
