//! Normalized result pages for query and scan.

use serde_json::Value;

use dynadoc_model::{Item, Key, QueryOutput, ScanOutput, item_to_document};

/// One page of query or scan results, in document form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The matching documents, in store order.
    pub items: Vec<Value>,
    /// Number of documents in this page.
    pub count: i32,
    /// Number of items examined before filtering.
    pub scanned_count: i32,
    /// Cursor for the next page, `None` when this page is the last.
    /// Feed it back through `Options::last` to continue.
    pub last: Option<Key>,
}

impl Page {
    fn new(items: Vec<Item>, count: i32, scanned_count: i32, last_evaluated_key: Key) -> Self {
        Self {
            items: items.into_iter().map(item_to_document).collect(),
            count,
            scanned_count,
            last: if last_evaluated_key.is_empty() {
                None
            } else {
                Some(last_evaluated_key)
            },
        }
    }
}

impl From<QueryOutput> for Page {
    fn from(output: QueryOutput) -> Self {
        Self::new(
            output.items,
            output.count,
            output.scanned_count,
            output.last_evaluated_key,
        )
    }
}

impl From<ScanOutput> for Page {
    fn from(output: ScanOutput) -> Self {
        Self::new(
            output.items,
            output.count,
            output.scanned_count,
            output.last_evaluated_key,
        )
    }
}
