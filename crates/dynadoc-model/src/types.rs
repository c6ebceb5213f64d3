//! Shared table and item types.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attribute_value::AttributeValue;

/// An item: a map from attribute name to typed value.
pub type Item = HashMap<String, AttributeValue>;

/// A primary key: hash key attribute plus optional range key attribute.
pub type Key = HashMap<String, AttributeValue>;

/// Expression name placeholders, e.g. `#Number` -> `Number`.
pub type ExpressionAttributeNames = HashMap<String, String>;

/// Expression value placeholders, e.g. `:Number` -> `{"N": "1"}`.
pub type ExpressionAttributeValues = HashMap<String, AttributeValue>;

// ---------------------------------------------------------------------------
// Key schema
// ---------------------------------------------------------------------------

/// The role of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    /// Partition (hash) key.
    #[serde(rename = "HASH")]
    Hash,
    /// Sort (range) key.
    #[serde(rename = "RANGE")]
    Range,
}

impl KeyType {
    /// Returns the wire string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "HASH",
            Self::Range => "RANGE",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a table or index key schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    /// The key attribute name.
    pub attribute_name: String,
    /// Whether the attribute is the hash or range key.
    pub key_type: KeyType,
}

impl KeySchemaElement {
    /// Creates a key schema element.
    pub fn new(attribute_name: impl Into<String>, key_type: KeyType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type,
        }
    }
}

/// The scalar type of a key attribute.
///
/// `Unknown` preserves type strings this client does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarAttributeType {
    /// String.
    S,
    /// Number.
    N,
    /// Binary.
    B,
    /// Unrecognized type string.
    Unknown(String),
}

impl ScalarAttributeType {
    /// Returns the wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::S => "S",
            Self::N => "N",
            Self::B => "B",
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for ScalarAttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScalarAttributeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScalarAttributeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "S" => Self::S,
            "N" => Self::N,
            "B" => Self::B,
            _ => Self::Unknown(s),
        })
    }
}

/// Declares the type of an attribute referenced by a key schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    /// The attribute name.
    pub attribute_name: String,
    /// The attribute's scalar type.
    pub attribute_type: ScalarAttributeType,
}

impl AttributeDefinition {
    /// Creates an attribute definition.
    pub fn new(attribute_name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Throughput and indexes
// ---------------------------------------------------------------------------

/// Provisioned read and write capacity for a table or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    /// Read capacity units.
    pub read_capacity_units: i64,
    /// Write capacity units.
    pub write_capacity_units: i64,
}

impl ProvisionedThroughput {
    /// Creates a throughput setting.
    #[must_use]
    pub fn new(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        Self {
            read_capacity_units,
            write_capacity_units,
        }
    }
}

/// Provisioned throughput as reported back in a table description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughputDescription {
    /// Read capacity units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<i64>,
    /// Write capacity units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<i64>,
    /// Number of throughput decreases today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_decreases_today: Option<i64>,
}

/// Which attributes an index projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionType {
    /// Project all attributes.
    All,
    /// Project key attributes only.
    KeysOnly,
    /// Project keys plus the listed non-key attributes.
    Include,
    /// Unrecognized projection type string.
    Unknown(String),
}

impl ProjectionType {
    /// Returns the wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::KeysOnly => "KEYS_ONLY",
            Self::Include => "INCLUDE",
            Self::Unknown(s) => s,
        }
    }
}

impl Serialize for ProjectionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "ALL" => Self::All,
            "KEYS_ONLY" => Self::KeysOnly,
            "INCLUDE" => Self::Include,
            _ => Self::Unknown(s),
        })
    }
}

/// Attribute projection for a secondary index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    /// The projection type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<ProjectionType>,
    /// Non-key attributes projected when the type is `INCLUDE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

impl Projection {
    /// A projection of the given type with no extra attributes.
    #[must_use]
    pub fn of_type(projection_type: ProjectionType) -> Self {
        Self {
            projection_type: Some(projection_type),
            non_key_attributes: Vec::new(),
        }
    }
}

/// A global secondary index definition submitted at table creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    /// The index name.
    pub index_name: String,
    /// The index key schema.
    pub key_schema: Vec<KeySchemaElement>,
    /// The attribute projection.
    pub projection: Projection,
    /// Provisioned throughput for the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

/// The lifecycle status of a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStatus {
    /// The index is being created.
    Creating,
    /// The index is being updated.
    Updating,
    /// The index is being deleted.
    Deleting,
    /// The index is ready for use.
    Active,
    /// Unrecognized status string.
    Unknown(String),
}

impl IndexStatus {
    /// Returns the wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Updating => "UPDATING",
            Self::Deleting => "DELETING",
            Self::Active => "ACTIVE",
            Self::Unknown(s) => s,
        }
    }
}

impl Serialize for IndexStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IndexStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "CREATING" => Self::Creating,
            "UPDATING" => Self::Updating,
            "DELETING" => Self::Deleting,
            "ACTIVE" => Self::Active,
            _ => Self::Unknown(s),
        })
    }
}

/// A global secondary index as reported back in a table description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndexDescription {
    /// The index name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// The index key schema.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    /// The attribute projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// The index lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_status: Option<IndexStatus>,
    /// Number of items in the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    /// Provisioned throughput for the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
}

// ---------------------------------------------------------------------------
// Table description
// ---------------------------------------------------------------------------

/// The lifecycle status of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// The table is being created.
    Creating,
    /// The table is being updated.
    Updating,
    /// The table is being deleted.
    Deleting,
    /// The table is ready for use.
    Active,
    /// Unrecognized status string.
    Unknown(String),
}

impl TableStatus {
    /// Returns the wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Updating => "UPDATING",
            Self::Deleting => "DELETING",
            Self::Active => "ACTIVE",
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TableStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TableStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "CREATING" => Self::Creating,
            "UPDATING" => Self::Updating,
            "DELETING" => Self::Deleting,
            "ACTIVE" => Self::Active,
            _ => Self::Unknown(s),
        })
    }
}

/// What a modifying operation returns in its `Attributes` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnValue {
    /// Return nothing.
    #[serde(rename = "NONE")]
    None,
    /// Return the item as it was before the operation.
    #[serde(rename = "ALL_OLD")]
    AllOld,
    /// Return only updated attributes, pre-update values.
    #[serde(rename = "UPDATED_OLD")]
    UpdatedOld,
    /// Return the item as it is after the operation.
    #[serde(rename = "ALL_NEW")]
    AllNew,
    /// Return only updated attributes, post-update values.
    #[serde(rename = "UPDATED_NEW")]
    UpdatedNew,
}

/// A table as described by the store.
///
/// Every field is optional; stores differ in how much they report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescription {
    /// The table name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    /// The table lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_status: Option<TableStatus>,
    /// The table key schema.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    /// Attribute definitions for key attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    /// Creation time as epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<f64>,
    /// Number of items in the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    /// Total table size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_size_bytes: Option<i64>,
    /// The table ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_arn: Option<String>,
    /// The table id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Provisioned throughput for the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
    /// Global secondary indexes on the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndexDescription>,
}
