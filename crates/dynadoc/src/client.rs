//! Document-level operations against one table.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use dynadoc_http::{Channel, HttpChannel};
use dynadoc_model::{
    AttributeValue, CreateTableOutput, DeleteItemInput, DeleteTableInput, DeleteTableOutput,
    ExpressionAttributeNames, ExpressionAttributeValues, GetItemInput, GetItemOutput, Operation,
    PutItemInput, QueryInput, QueryOutput, ReturnValue, ScanInput, ScanOutput, TableDescription,
    UpdateItemInput, UpdateItemOutput, document_to_item, item_to_document,
};

use crate::condition::{self, Predicates};
use crate::config::DynadocConfig;
use crate::error::Error;
use crate::options::Options;
use crate::page::Page;
use crate::table::TableDefinition;
use crate::update;

/// Attribute generated for created documents that arrive without one.
const ID_ATTRIBUTE: &str = "id";

/// A client for one table of a document store.
///
/// Documents are plain JSON objects; the client compiles predicates,
/// converts documents to wire form, and carries requests over a
/// [`Channel`]. Clones share the underlying channel.
///
/// ```no_run
/// use dynadoc::{DocumentClient, DynadocConfig, Options, Predicates};
/// use serde_json::json;
///
/// # tokio_test::block_on(async {
/// let client = DocumentClient::connect(&DynadocConfig::from_env(), "orders").unwrap();
/// let created = client.create(json!({"name": "foo"}), &Options::new()).await.unwrap();
///
/// let page = client
///     .query(&Predicates::equalities([("name", "foo")]), &Options::new())
///     .await
///     .unwrap();
/// assert_eq!(page.items[0]["id"], created["id"]);
/// # });
/// ```
#[derive(Clone)]
pub struct DocumentClient {
    table: String,
    channel: Arc<dyn Channel>,
}

impl DocumentClient {
    /// A client for `table` over an existing channel.
    pub fn new(table: impl Into<String>, channel: Arc<dyn Channel>) -> Self {
        Self {
            table: table.into(),
            channel,
        }
    }

    /// Connect to the store described by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the configured endpoint is not a usable URL.
    pub fn connect(config: &DynadocConfig, table: impl Into<String>) -> Result<Self, Error> {
        let channel = HttpChannel::new(
            &config.endpoint,
            config.region.clone(),
            config.credentials.clone(),
            config.timeout,
        )?;
        let table = table.into();
        info!(table, endpoint = %config.endpoint, "connected document client");
        Ok(Self::new(table, Arc::new(channel)))
    }

    /// The table this client operates on.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Store a new document, generating a string `id` when the document
    /// has none, and return the document as written.
    ///
    /// A guard from [`Options::conditional`] is attached as the put's
    /// condition expression, with [`Options::attribute`] bindings as its
    /// name placeholders; a rejected guard surfaces as a store error.
    pub async fn create(&self, document: Value, options: &Options) -> Result<Value, Error> {
        let mut item = document_to_item(document)?;
        if !item.contains_key(ID_ATTRIBUTE) {
            let id = Uuid::new_v4().to_string();
            item.insert(ID_ATTRIBUTE.to_owned(), AttributeValue::S(id));
        }

        let mut input = PutItemInput {
            table_name: self.table.clone(),
            item: item.clone(),
            ..PutItemInput::default()
        };
        if let Some(guard) = &options.conditional {
            input.condition_expression = Some(guard.clone());
        }
        if !options.attributes.is_empty() {
            input.expression_attribute_names = options.attributes.clone();
        }

        self.send_raw(Operation::PutItem, &input).await?;
        Ok(item_to_document(item))
    }

    /// Fetch one document by its full primary key, `None` when no item
    /// matches.
    pub async fn get(&self, key: Value) -> Result<Option<Value>, Error> {
        let input = GetItemInput {
            table_name: self.table.clone(),
            key: document_to_item(key)?,
        };

        let output: GetItemOutput = self.send(Operation::GetItem, &input).await?;
        Ok(output.item.map(item_to_document))
    }

    /// Merge `body` into the document at `key` and return the stored
    /// document.
    ///
    /// Every non-key member of `body` becomes a `SET` assignment;
    /// attributes absent from `body` keep their stored values. A body
    /// with no non-key members degrades to a key-only upsert.
    pub async fn update(&self, key: Value, body: Value) -> Result<Value, Error> {
        let key_item = document_to_item(key)?;
        let body_item = document_to_item(body)?;
        let update = update::compile_set(&body_item, &key_item)?;

        let mut input = UpdateItemInput {
            table_name: self.table.clone(),
            key: key_item,
            return_values: Some(ReturnValue::AllNew),
            ..UpdateItemInput::default()
        };
        if !update.is_empty() {
            input.update_expression = Some(update.expression);
            input.expression_attribute_names = update.names;
            input.expression_attribute_values = update.values;
        }

        let output: UpdateItemOutput = self.send(Operation::UpdateItem, &input).await?;
        Ok(item_to_document(output.attributes))
    }

    /// Delete the document at `key`. Deleting a missing document is not
    /// an error.
    pub async fn delete(&self, key: Value) -> Result<(), Error> {
        let input = DeleteItemInput {
            table_name: self.table.clone(),
            key: document_to_item(key)?,
        };

        self.send_raw(Operation::DeleteItem, &input).await?;
        Ok(())
    }

    /// Query documents whose key attributes satisfy `key`, against the
    /// primary key or the index named in [`Options::index`].
    ///
    /// The key predicates compile into the key condition; predicates
    /// from [`Options::filter`] compile into a separate filter fragment
    /// applied after key evaluation. The two fragments must constrain
    /// disjoint attributes, otherwise their placeholder tables would
    /// collide.
    pub async fn query(&self, key: &Predicates, options: &Options) -> Result<Page, Error> {
        let mut names = ExpressionAttributeNames::new();
        let mut values = ExpressionAttributeValues::new();

        let mut input = QueryInput {
            table_name: self.table.clone(),
            index_name: options.index.clone(),
            limit: options.limit,
            ..QueryInput::default()
        };

        let compiled_key = condition::compile(key)?;
        if !compiled_key.is_empty() {
            input.key_condition_expression = Some(compiled_key.expression);
            merge_fragment(&mut names, &mut values, compiled_key.names, compiled_key.values)?;
        }

        if let Some(filter) = &options.filter {
            let compiled_filter = condition::compile(filter)?;
            if !compiled_filter.is_empty() {
                input.filter_expression = Some(compiled_filter.expression);
                merge_fragment(
                    &mut names,
                    &mut values,
                    compiled_filter.names,
                    compiled_filter.values,
                )?;
            }
        }

        if let Some(last) = &options.last {
            input.exclusive_start_key = last.clone();
        }
        input.expression_attribute_names = names;
        input.expression_attribute_values = values;

        let output: QueryOutput = self.send(Operation::Query, &input).await?;
        Ok(Page::from(output))
    }

    /// Scan the table, or the index named in [`Options::index`],
    /// honoring [`Options::filter`], [`Options::limit`] and
    /// [`Options::last`].
    pub async fn scan(&self, options: &Options) -> Result<Page, Error> {
        let mut input = ScanInput {
            table_name: self.table.clone(),
            index_name: options.index.clone(),
            limit: options.limit,
            ..ScanInput::default()
        };

        if let Some(filter) = &options.filter {
            let compiled = condition::compile(filter)?;
            if !compiled.is_empty() {
                input.filter_expression = Some(compiled.expression);
                input.expression_attribute_names = compiled.names;
                input.expression_attribute_values = compiled.values;
            }
        }

        if let Some(last) = &options.last {
            input.exclusive_start_key = last.clone();
        }

        let output: ScanOutput = self.send(Operation::Scan, &input).await?;
        Ok(Page::from(output))
    }

    /// Create this client's table with the given schema.
    pub async fn create_table(
        &self,
        definition: TableDefinition,
    ) -> Result<TableDescription, Error> {
        let input = definition.into_input(self.table.clone());
        let output: CreateTableOutput = self.send(Operation::CreateTable, &input).await?;
        info!(table = %self.table, "created table");
        Ok(output.table_description)
    }

    /// Delete this client's table and everything in it.
    pub async fn delete_table(&self) -> Result<TableDescription, Error> {
        let input = DeleteTableInput {
            table_name: self.table.clone(),
        };
        let output: DeleteTableOutput = self.send(Operation::DeleteTable, &input).await?;
        info!(table = %self.table, "deleted table");
        Ok(output.table_description)
    }

    /// Issue one operation and decode its response body.
    async fn send<I, O>(&self, operation: Operation, input: &I) -> Result<O, Error>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let body = self.send_raw(operation, input).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { operation, source })
    }

    /// Issue one operation, returning the raw response body.
    async fn send_raw<I: Serialize>(
        &self,
        operation: Operation,
        input: &I,
    ) -> Result<Bytes, Error> {
        let payload =
            serde_json::to_vec(input).map_err(|source| Error::Encode { operation, source })?;
        debug!(%operation, table = %self.table, bytes = payload.len(), "issuing operation");
        let body = self.channel.send(operation, Bytes::from(payload)).await?;
        Ok(body)
    }
}

impl fmt::Debug for DocumentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentClient")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

/// Union one compiled fragment's tables into the request tables.
///
/// Value tokens mirror name tokens one to one, so checking names covers
/// both tables. A collision means two fragments of the request constrain
/// the same attribute, which would leave the shared token ambiguous.
fn merge_fragment(
    names: &mut ExpressionAttributeNames,
    values: &mut ExpressionAttributeValues,
    fragment_names: ExpressionAttributeNames,
    fragment_values: ExpressionAttributeValues,
) -> Result<(), Error> {
    for (token, attribute) in fragment_names {
        if names.insert(token.clone(), attribute).is_some() {
            return Err(Error::PlaceholderCollision(token));
        }
    }
    values.extend(fragment_values);
    Ok(())
}
