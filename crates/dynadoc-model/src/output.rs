//! Response payloads for store operations.
//!
//! `PutItem` and `DeleteItem` responses carry nothing this client uses,
//! so no types exist for them; the response body is discarded after the
//! status check.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Item, Key, TableDescription};

/// Output of the `CreateTable` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableOutput {
    /// Description of the table being created.
    pub table_description: TableDescription,
}

/// Output of the `DeleteTable` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableOutput {
    /// Description of the table being deleted.
    pub table_description: TableDescription,
}

/// Output of the `GetItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemOutput {
    /// The item, absent when no item matched the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// Output of the `UpdateItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemOutput {
    /// Item attributes as requested via `ReturnValues`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: Item,
}

/// Output of the `Query` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    /// The matched items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Number of items returned.
    #[serde(default)]
    pub count: i32,
    /// Number of items evaluated before filtering.
    #[serde(default)]
    pub scanned_count: i32,
    /// Resume key; present when the result page is incomplete.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub last_evaluated_key: Key,
}

/// Output of the `Scan` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    /// The matched items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Number of items returned.
    #[serde(default)]
    pub count: i32,
    /// Number of items evaluated before filtering.
    #[serde(default)]
    pub scanned_count: i32,
    /// Resume key; present when the result page is incomplete.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub last_evaluated_key: Key,
}
