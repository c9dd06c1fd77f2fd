use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RepositoryError, Result};

/// Identifier of a stored record.
///
/// Always non-empty. Two records with the same id cannot coexist: writing an
/// existing id replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new id, rejecting empty or whitespace-only strings.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RepositoryError::InvalidId("id must not be empty".to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RepositoryError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = RepositoryError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// A persisted `{id, data}` pair.
///
/// `data` is opaque to every backend: no shape is assumed or enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub data: Value,
}

impl Record {
    pub fn new(id: RecordId, data: Value) -> Self {
        Self { id, data }
    }
}

/// Acknowledgment returned by a successful `store`.
///
/// Only a success marker. The request id is exposed for log correlation and
/// is `None` for backends that have no such concept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreAck {
    request_id: Option<String>,
}

impl StoreAck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
