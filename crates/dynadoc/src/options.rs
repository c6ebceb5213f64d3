//! Per-request options.

use std::collections::HashMap;

use dynadoc_model::Key;

use crate::condition::Predicates;

/// Options accepted by the document operations.
///
/// All fields are optional and chainable. An operation ignores the
/// options it does not recognize.
///
/// ```
/// use dynadoc::{Options, Predicates};
///
/// let options = Options::new()
///     .filter(Predicates::equalities([("number", "5")]))
///     .limit(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Post-key filter predicates for query and scan.
    pub(crate) filter: Option<Predicates>,
    /// Page size cap for query and scan.
    pub(crate) limit: Option<i32>,
    /// Pagination cursor from a previous page, echoed back verbatim.
    pub(crate) last: Option<Key>,
    /// Secondary index to evaluate against instead of the primary key.
    pub(crate) index: Option<String>,
    /// Pre-rendered guard expression for a conditional create.
    pub(crate) conditional: Option<String>,
    /// Name placeholders referenced by `conditional`.
    pub(crate) attributes: HashMap<String, String>,
}

impl Options {
    /// No options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter results with the given predicates after key evaluation.
    #[must_use]
    pub fn filter(mut self, predicates: Predicates) -> Self {
        self.filter = Some(predicates);
        self
    }

    /// Cap the number of items evaluated per page.
    #[must_use]
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume after the cursor returned in a previous [`Page`].
    ///
    /// [`Page`]: crate::page::Page
    #[must_use]
    pub fn last(mut self, cursor: Key) -> Self {
        self.last = Some(cursor);
        self
    }

    /// Evaluate against the named secondary index.
    #[must_use]
    pub fn index(mut self, name: impl Into<String>) -> Self {
        self.index = Some(name.into());
        self
    }

    /// Guard a create with a pre-rendered condition expression.
    #[must_use]
    pub fn conditional(mut self, expression: impl Into<String>) -> Self {
        self.conditional = Some(expression.into());
        self
    }

    /// Bind a `#placeholder` referenced by the conditional guard to a
    /// real attribute name.
    #[must_use]
    pub fn attribute(
        mut self,
        placeholder: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.attributes.insert(placeholder.into(), attribute.into());
        self
    }
}
