//! Typed document client for DynamoDB-compatible stores.
//!
//! Callers work with plain JSON documents and structured predicates; the
//! crate compiles predicates into condition expressions with their
//! placeholder tables, converts documents to and from the wire item
//! format, and signs every request:
//!
//! - [`DocumentClient`]: per-table document and table operations
//! - [`Predicates`] and [`compile`]: condition expression compiler
//! - [`Options`]: per-call filter, pagination and guard settings
//! - [`DynadocConfig`]: endpoint, region and credential configuration
//!
//! ```no_run
//! use dynadoc::{DocumentClient, DynadocConfig, Operator, Options, PredicateTerm, Predicates};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let config = DynadocConfig::from_env();
//! let client = DocumentClient::connect(&config, "orders").unwrap();
//!
//! client.create(json!({"name": "foo", "number": 5}), &Options::new()).await.unwrap();
//!
//! let overdue = Predicates::terms([PredicateTerm::with_operator(
//!     "number",
//!     json!(3),
//!     Operator::Ge,
//! )]);
//! let page = client.scan(&Options::new().filter(overdue)).await.unwrap();
//! println!("{} matching documents", page.count);
//! # });
//! ```

pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod options;
pub mod page;
pub mod table;
pub mod update;

pub use client::DocumentClient;
pub use condition::{
    CompiledCondition, ConditionError, Operator, PredicateTerm, Predicates, compile,
};
pub use config::DynadocConfig;
pub use error::Error;
pub use options::Options;
pub use page::Page;
pub use table::TableDefinition;
pub use update::{CompiledUpdate, compile_set};

pub use dynadoc_http::{Channel, Credentials, HttpChannel, TransportError};
pub use dynadoc_model::{
    AttributeValue, GlobalSecondaryIndex, Item, Key, KeySchemaElement, KeyType, Projection,
    ProjectionType, ProvisionedThroughput, ScalarAttributeType, StoreError, StoreErrorCode,
    TableDescription, TableStatus,
};
