//! Property documents
//!
//! Desired and previous state travel as JSON maps with PascalCase keys, the
//! shape declarative templates use. Providers convert between documents and
//! their typed property structs at the operation boundary.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use stratus_common::{Error, Result};

/// A resource property document.
pub type Document = serde_json::Map<String, Value>;

/// Deserialize a document into a typed property struct.
pub fn to_model<T: DeserializeOwned>(document: &Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(document.clone()))?)
}

/// Serialize a typed property struct back into a document.
pub fn from_model<T: Serialize>(model: &T) -> Result<Document> {
    match serde_json::to_value(model)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Internal(format!(
            "resource model serialized to non-object JSON: {other}"
        ))),
    }
}

/// Extract an optional string attribute, treating empty strings as absent.
pub fn get_string_attr(document: &Document, key: &str) -> Option<String> {
    document.get(key).and_then(|value| match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}
