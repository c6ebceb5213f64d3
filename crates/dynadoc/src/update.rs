//! `SET` update-expression builder.
//!
//! Updates are upsert merges: every non-key member of the body becomes
//! one `SET` assignment, reusing the placeholder scheme of the condition
//! compiler. Key attributes are addressed by the request key and never
//! assigned.

use dynadoc_model::{ExpressionAttributeNames, ExpressionAttributeValues, Item, Key};

use crate::condition::{ConditionError, validate_attribute_name};

/// A compiled `SET` expression with its placeholder tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledUpdate {
    /// `SET #a = :a, #b = :b`, or empty when nothing is assigned.
    pub expression: String,
    /// `#token` to real attribute name, one entry per assignment.
    pub names: ExpressionAttributeNames,
    /// `:token` to wire value, one entry per assignment.
    pub values: ExpressionAttributeValues,
}

impl CompiledUpdate {
    /// True when the body contributed no assignments; the request must
    /// then omit the update expression and becomes a key-only upsert.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }
}

/// Build a `SET` expression assigning every member of `body` that is not
/// a key attribute.
///
/// Assignments are ordered by attribute name so equal bodies always
/// render the same expression.
///
/// # Errors
///
/// Rejects body attribute names that cannot form a placeholder token.
pub fn compile_set(body: &Item, key: &Key) -> Result<CompiledUpdate, ConditionError> {
    let mut attributes: Vec<&String> = body
        .keys()
        .filter(|attribute| !key.contains_key(*attribute))
        .collect();
    attributes.sort();

    let mut assignments = Vec::with_capacity(attributes.len());
    let mut names = ExpressionAttributeNames::with_capacity(attributes.len());
    let mut values = ExpressionAttributeValues::with_capacity(attributes.len());

    for attribute in attributes {
        validate_attribute_name(attribute)?;
        let name = format!("#{attribute}");
        let value_token = format!(":{attribute}");
        assignments.push(format!("{name} = {value_token}"));
        names.insert(name, attribute.clone());
        values.insert(value_token, body[attribute].clone());
    }

    let expression = if assignments.is_empty() {
        String::new()
    } else {
        format!("SET {}", assignments.join(", "))
    };

    Ok(CompiledUpdate {
        expression,
        names,
        values,
    })
}
