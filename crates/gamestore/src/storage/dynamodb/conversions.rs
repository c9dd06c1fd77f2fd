//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between JSON payloads and DynamoDB
//! `AttributeValue`s. These are testable in isolation without DynamoDB access.
//!
//! DynamoDB stores numbers as normalized decimals, trimming leading and
//! trailing zeroes. A whole-number float such as `10.0` is therefore read back
//! as the integer `10`: equal by value, but not by `serde_json` variant.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use gamestore_core::storage::{Record, RecordId, RepositoryError};

/// A DynamoDB item (or key).
pub type Item = HashMap<String, AttributeValue>;

/// Attribute holding the payload.
pub const DATA_ATTRIBUTE: &str = "data";

// ============================================================================
// Item conversions
// ============================================================================

/// Build the primary key for `id`.
pub fn key_item(key_attribute: &str, id: &RecordId) -> Item {
    let mut key = HashMap::new();
    key.insert(
        key_attribute.to_string(),
        AttributeValue::S(id.as_str().to_string()),
    );
    key
}

/// Convert an `{id, data}` pair to a DynamoDB item.
pub fn record_to_item(key_attribute: &str, id: &RecordId, data: &Value) -> Item {
    let mut item = key_item(key_attribute, id);
    item.insert(DATA_ATTRIBUTE.to_string(), value_to_attribute(data));
    item
}

/// Convert a DynamoDB item back to a record.
pub fn item_to_record(key_attribute: &str, item: &Item) -> Result<Record, RepositoryError> {
    let id = RecordId::new(get_string(item, key_attribute)?)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    let data = attribute_to_value(get_attribute(item, DATA_ATTRIBUTE)?)?;
    Ok(Record::new(id, data))
}

fn get_attribute<'a>(item: &'a Item, key: &str) -> Result<&'a AttributeValue, RepositoryError> {
    item.get(key)
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing field: {key}")))
}

fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    get_attribute(item, key)?
        .as_s()
        .cloned()
        .map_err(|_| RepositoryError::Serialization(format!("Field {key} is not a string")))
}

// ============================================================================
// Value conversions
// ============================================================================

/// Convert a JSON value to its native DynamoDB representation.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
///
/// String and number sets decode as arrays. Binary attributes have no JSON
/// counterpart and are rejected. Numbers without a fractional part or exponent
/// decode as integers, so a stored `10.0` comes back as `10`.
pub fn attribute_to_value(attr: &AttributeValue) -> Result<Value, RepositoryError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), attribute_to_value(v)?)))
            .collect::<Result<Map<_, _>, RepositoryError>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::Serialization(
            "Binary attributes are not supported".to_string(),
        )),
        other => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn parse_number(n: &str) -> Result<Value, RepositoryError> {
    serde_json::from_str::<Number>(n.trim())
        .map(Value::Number)
        .map_err(|_| RepositoryError::Serialization(format!("Invalid number: {n}")))
}
