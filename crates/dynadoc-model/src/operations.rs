//! Store operations this client can issue.

use std::fmt;

/// The operations of the document-store wire protocol used by this client.
///
/// Each operation maps to an `X-Amz-Target` header value of the form
/// `DynamoDB_20120810.<Operation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Put (create or replace) an item.
    PutItem,
    /// Get a single item by primary key.
    GetItem,
    /// Update attributes of a single item.
    UpdateItem,
    /// Delete a single item by primary key.
    DeleteItem,
    /// Query items by key condition.
    Query,
    /// Scan all items in a table.
    Scan,
}

impl Operation {
    /// Returns the operation name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::DeleteTable => "DeleteTable",
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
            Self::Query => "Query",
            Self::Scan => "Scan",
        }
    }

    /// Returns the full `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(self) -> &'static str {
        match self {
            Self::CreateTable => "DynamoDB_20120810.CreateTable",
            Self::DeleteTable => "DynamoDB_20120810.DeleteTable",
            Self::PutItem => "DynamoDB_20120810.PutItem",
            Self::GetItem => "DynamoDB_20120810.GetItem",
            Self::UpdateItem => "DynamoDB_20120810.UpdateItem",
            Self::DeleteItem => "DynamoDB_20120810.DeleteItem",
            Self::Query => "DynamoDB_20120810.Query",
            Self::Scan => "DynamoDB_20120810.Scan",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
