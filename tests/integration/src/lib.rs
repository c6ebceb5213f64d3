//! Integration tests for the dynadoc client.
//!
//! These tests require a running DynamoDB-compatible server at
//! `localhost:8000` (DynamoDB Local works; set `DYNADOC_ENDPOINT` to point
//! elsewhere). They are marked `#[ignore]` so they don't run during normal
//! `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p dynadoc-integration -- --ignored
//! ```

use std::sync::Once;

use anyhow::Context;
use serde_json::json;

use dynadoc::{
    DocumentClient, DynadocConfig, GlobalSecondaryIndex, KeySchemaElement, KeyType, Options,
    Projection, ProjectionType, ProvisionedThroughput, ScalarAttributeType, TableDefinition,
};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a document client for `table` pointing at the local server.
#[must_use]
pub fn document_client(table: &str) -> DocumentClient {
    init_tracing();

    let config = DynadocConfig::from_env();
    DocumentClient::connect(&config, table)
        .unwrap_or_else(|e| panic!("failed to connect to {}: {e}", config.endpoint))
}

/// Generate a unique table name for a test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Schema shared by the document tests: `name` hash key, `id` range key,
/// and a keys-only `SecIndex` over `(number, sort)`.
#[must_use]
pub fn document_table_definition() -> TableDefinition {
    TableDefinition::new()
        .attribute("name", ScalarAttributeType::S)
        .attribute("id", ScalarAttributeType::S)
        .attribute("number", ScalarAttributeType::S)
        .attribute("sort", ScalarAttributeType::S)
        .hash_key("name")
        .range_key("id")
        .throughput(1, 1)
        .secondary_index(GlobalSecondaryIndex {
            index_name: "SecIndex".to_owned(),
            key_schema: vec![
                KeySchemaElement::new("number", KeyType::Hash),
                KeySchemaElement::new("sort", KeyType::Range),
            ],
            projection: Projection::of_type(ProjectionType::KeysOnly),
            provisioned_throughput: Some(ProvisionedThroughput::new(1, 1)),
        })
}

/// Create the shared-schema table for `client`. Caller is responsible for
/// cleanup.
pub async fn create_document_table(client: &DocumentClient) -> anyhow::Result<()> {
    client
        .create_table(document_table_definition())
        .await
        .with_context(|| format!("failed to create table {}", client.table()))?;
    Ok(())
}

/// Seed the documents the scan and query tests expect and return the
/// generated id of the `foo` document.
pub async fn seed_documents(client: &DocumentClient) -> anyhow::Result<String> {
    let foo = client
        .create(json!({"name": "foo", "number": "5", "sort": "A"}), &Options::new())
        .await
        .context("failed to seed foo")?;
    client
        .create(json!({"name": "bar"}), &Options::new())
        .await
        .context("failed to seed bar")?;
    client
        .create(json!({"name": "car"}), &Options::new())
        .await
        .context("failed to seed car")?;

    let id = foo["id"].as_str().context("seeded document has no id")?;
    Ok(id.to_owned())
}

/// Delete the test table. The table may already be gone.
pub async fn cleanup_table(client: &DocumentClient) {
    let _ = client.delete_table().await;
}

mod test_documents;
mod test_query;
mod test_table;
