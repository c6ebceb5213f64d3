//! Table schema definitions.

use dynadoc_model::{
    AttributeDefinition, CreateTableInput, GlobalSecondaryIndex, KeySchemaElement, KeyType,
    ProvisionedThroughput, ScalarAttributeType,
};

/// Schema description for a table to create.
///
/// The table name is supplied by the client issuing the create, so one
/// definition can stamp out any number of tables.
///
/// ```
/// use dynadoc::{ScalarAttributeType, TableDefinition};
///
/// let definition = TableDefinition::new()
///     .attribute("name", ScalarAttributeType::S)
///     .attribute("id", ScalarAttributeType::S)
///     .hash_key("name")
///     .range_key("id")
///     .throughput(1, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDefinition {
    /// Type declarations for every key attribute, table and index alike.
    pub attribute_definitions: Vec<AttributeDefinition>,
    /// The table key schema.
    pub key_schema: Vec<KeySchemaElement>,
    /// Provisioned throughput for the table.
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    /// Global secondary indexes created with the table.
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,
}

impl TableDefinition {
    /// An empty definition; chain the other methods to fill it in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a key attribute's type.
    #[must_use]
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        attribute_type: ScalarAttributeType,
    ) -> Self {
        self.attribute_definitions
            .push(AttributeDefinition::new(name, attribute_type));
        self
    }

    /// Set the partition key.
    #[must_use]
    pub fn hash_key(mut self, name: impl Into<String>) -> Self {
        self.key_schema.push(KeySchemaElement::new(name, KeyType::Hash));
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn range_key(mut self, name: impl Into<String>) -> Self {
        self.key_schema.push(KeySchemaElement::new(name, KeyType::Range));
        self
    }

    /// Set provisioned throughput in read and write capacity units.
    #[must_use]
    pub fn throughput(mut self, read: i64, write: i64) -> Self {
        self.provisioned_throughput = Some(ProvisionedThroughput::new(read, write));
        self
    }

    /// Add a global secondary index.
    #[must_use]
    pub fn secondary_index(mut self, index: GlobalSecondaryIndex) -> Self {
        self.global_secondary_indexes.push(index);
        self
    }

    /// The wire input creating a table of this shape with `table_name`.
    pub(crate) fn into_input(self, table_name: String) -> CreateTableInput {
        CreateTableInput {
            table_name,
            attribute_definitions: self.attribute_definitions,
            key_schema: self.key_schema,
            provisioned_throughput: self.provisioned_throughput,
            global_secondary_indexes: self.global_secondary_indexes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_create_table_input() {
        let input = TableDefinition::new()
            .attribute("name", ScalarAttributeType::S)
            .attribute("id", ScalarAttributeType::S)
            .hash_key("name")
            .range_key("id")
            .throughput(1, 1)
            .into_input("orders".to_owned());

        assert_eq!(input.table_name, "orders");
        assert_eq!(input.attribute_definitions.len(), 2);
        assert_eq!(
            input.key_schema,
            vec![
                KeySchemaElement::new("name", KeyType::Hash),
                KeySchemaElement::new("id", KeyType::Range),
            ]
        );
        assert_eq!(
            input.provisioned_throughput,
            Some(ProvisionedThroughput::new(1, 1))
        );
        assert!(input.global_secondary_indexes.is_empty());
    }
}
