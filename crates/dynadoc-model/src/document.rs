//! Conversion between caller-facing JSON documents and wire items.
//!
//! Callers work with plain `serde_json::Value` objects; the store works
//! with maps of typed [`AttributeValue`]s. These helpers lift whole
//! documents across that boundary.

use serde_json::Value;

use crate::attribute_value::AttributeValue;
use crate::types::Item;

/// Error converting a JSON value into a wire item.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The top-level value was not a JSON object.
    #[error("document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Marshal a JSON document into a wire item.
///
/// The top-level value must be a JSON object; each member is converted
/// to its wire form.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] if `document` is not an object.
pub fn document_to_item(document: Value) -> Result<Item, DocumentError> {
    match document {
        Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        other => Err(DocumentError::NotAnObject(json_type_name(&other))),
    }
}

/// Unmarshal a wire item back into a JSON document.
#[must_use]
pub fn item_to_document(item: Item) -> Value {
    Value::Object(
        item.into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect(),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
