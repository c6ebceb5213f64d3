//! Wire model for the dynadoc document-store client.
//!
//! This crate defines the JSON wire types of the hash/range document
//! store protocol as used from the client side: the typed
//! [`AttributeValue`] union, request and response payloads for the
//! supported operations, table schema types and the store error
//! envelope. Conversions between caller-facing JSON documents and wire
//! items live in [`document`].

mod attribute_value;
pub mod document;
mod error;
mod input;
mod operations;
mod output;
mod types;

pub use attribute_value::AttributeValue;
pub use document::{DocumentError, document_to_item, item_to_document};
pub use error::{StoreError, StoreErrorCode};
pub use input::{
    CreateTableInput, DeleteItemInput, DeleteTableInput, GetItemInput, PutItemInput, QueryInput,
    ScanInput, UpdateItemInput,
};
pub use operations::Operation;
pub use output::{
    CreateTableOutput, DeleteTableOutput, GetItemOutput, QueryOutput, ScanOutput, UpdateItemOutput,
};
pub use types::{
    AttributeDefinition, ExpressionAttributeNames, ExpressionAttributeValues,
    GlobalSecondaryIndex, GlobalSecondaryIndexDescription, IndexStatus, Item, Key,
    KeySchemaElement, KeyType, Projection, ProjectionType, ProvisionedThroughput,
    ProvisionedThroughputDescription, ReturnValue, ScalarAttributeType, TableDescription,
    TableStatus,
};
