use std::env;

use serde::Deserialize;
use thiserror::Error;

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "sa-east-1";

/// Partition key attribute of the games table.
pub const DEFAULT_KEY_ATTRIBUTE: &str = "game_id";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Storage configuration, populated once at startup by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// DynamoDB table holding the records.
    pub table_name: String,
    /// Custom endpoint URL (for local DynamoDB or alternate deployments).
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// AWS region (default: "sa-east-1").
    #[serde(default = "default_region")]
    pub region: String,
    /// Name of the partition key attribute (default: "game_id").
    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_key_attribute() -> String {
    DEFAULT_KEY_ATTRIBUTE.to_string()
}

impl StorageConfig {
    /// Creates a configuration for `table_name` with default region and key.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            endpoint_url: None,
            region: default_region(),
            key_attribute: default_key_attribute(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (required)
    /// - `AWS_ENDPOINT_URL` - Endpoint override (optional)
    /// - `AWS_REGION` - AWS region (default: "sa-east-1")
    /// - `DYNAMODB_KEY_ATTRIBUTE` - Partition key attribute (default: "game_id")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let table_name =
            var("DYNAMODB_TABLE_NAME").ok_or(ConfigError::MissingVar("DYNAMODB_TABLE_NAME"))?;

        Ok(Self {
            table_name,
            endpoint_url: var("AWS_ENDPOINT_URL"),
            region: var("AWS_REGION").unwrap_or_else(default_region),
            key_attribute: var("DYNAMODB_KEY_ATTRIBUTE").unwrap_or_else(default_key_attribute),
        })
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_key_attribute(mut self, key_attribute: impl Into<String>) -> Self {
        self.key_attribute = key_attribute.into();
        self
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
