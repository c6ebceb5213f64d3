//! Condition-expression compiler.
//!
//! The store forbids attribute names and literal values from appearing
//! directly inside expressions, so every constraint goes through a layer
//! of placeholders: `#attr` aliases the attribute name, `:attr` aliases
//! the value, and the request carries two tables resolving the aliases.
//! This module compiles an ordered predicate description into that form:
//! one rendered expression string plus its name and value tables.
//!
//! Compilation is pure and deterministic. Placeholder tokens are derived
//! from the attribute name alone, never from position, so the same input
//! always compiles to the same output.
//!
//! ```
//! use dynadoc::condition::{Predicates, compile};
//!
//! let compiled = compile(&Predicates::equalities([("PaymentStatus", "Registered")])).unwrap();
//! assert_eq!(compiled.expression, "#PaymentStatus = :PaymentStatus");
//! assert_eq!(compiled.names["#PaymentStatus"], "PaymentStatus");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use dynadoc_model::{AttributeValue, ExpressionAttributeNames, ExpressionAttributeValues};

/// Connective joining clauses of a conjunction.
const CONNECTIVE: &str = " and ";

/// Comparison and function operators a predicate can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equality, rendered as `=`.
    #[default]
    Eq,
    /// Inequality, rendered as `<>`.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Prefix match, rendered as `begins_with(#attr,:attr)`.
    BeginsWith,
    /// Containment test, rendered as `contains(#attr,:attr)`.
    Contains,
}

/// The two clause syntaxes of the expression grammar.
enum Syntax {
    /// `#attr <op> :attr`
    Infix,
    /// `op(#attr,:attr)`
    FunctionCall,
}

impl Operator {
    /// The wire spelling, as parsed by [`FromStr`] and printed by
    /// `Display`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::BeginsWith => "begins_with",
            Self::Contains => "contains",
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge => Syntax::Infix,
            Self::BeginsWith | Self::Contains => Syntax::FunctionCall,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "=" => Self::Eq,
            "<>" => Self::Ne,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            "begins_with" => Self::BeginsWith,
            "contains" => Self::Contains,
            other => return Err(ConditionError::UnknownOperator(other.to_owned())),
        })
    }
}

/// One attribute constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateTerm {
    /// The attribute the constraint applies to.
    pub attribute: String,
    /// The comparison operand, in document form.
    pub value: Value,
    /// How the attribute relates to the operand.
    pub operator: Operator,
}

impl PredicateTerm {
    /// An equality term.
    pub fn new(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_operator(attribute, value, Operator::Eq)
    }

    /// A term with an explicit operator.
    pub fn with_operator(
        attribute: impl Into<String>,
        value: impl Into<Value>,
        operator: Operator,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
            operator,
        }
    }
}

/// An ordered conjunction of predicates.
///
/// Two shapes are accepted: `(attribute, value)` pairs that are all
/// equality tests, or [`PredicateTerm`]s carrying their own operators.
/// Both keep their order through compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicates {
    /// Ordered `(attribute, value)` pairs, each an equality predicate.
    Equalities(Vec<(String, Value)>),
    /// Ordered terms with explicit operators.
    Terms(Vec<PredicateTerm>),
}

impl Predicates {
    /// No constraints. Compiles to an empty fragment, which callers must
    /// leave out of the request entirely.
    #[must_use]
    pub fn none() -> Self {
        Self::Equalities(Vec::new())
    }

    /// Equality predicates over `(attribute, value)` pairs, in order.
    pub fn equalities<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Equalities(
            pairs
                .into_iter()
                .map(|(attribute, value)| (attribute.into(), value.into()))
                .collect(),
        )
    }

    /// Terms with explicit operators, in order.
    pub fn terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = PredicateTerm>,
    {
        Self::Terms(terms.into_iter().collect())
    }

    /// True when there is nothing to compile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Equalities(pairs) => pairs.is_empty(),
            Self::Terms(terms) => terms.is_empty(),
        }
    }

    /// Normalize both shapes into `(attribute, value, operator)` triples.
    fn triples(&self) -> Vec<(&str, &Value, Operator)> {
        match self {
            Self::Equalities(pairs) => pairs
                .iter()
                .map(|(attribute, value)| (attribute.as_str(), value, Operator::Eq))
                .collect(),
            Self::Terms(terms) => terms
                .iter()
                .map(|term| (term.attribute.as_str(), &term.value, term.operator))
                .collect(),
        }
    }
}

/// Errors from compiling a predicate description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// An attribute name cannot be embedded in a placeholder token.
    #[error("invalid attribute name {0:?}: expected ASCII letters, digits or '_'")]
    InvalidAttributeName(String),
    /// The same attribute appeared in more than one predicate.
    #[error("attribute {0:?} appears in more than one predicate")]
    DuplicateAttribute(String),
    /// An operator spelling outside the supported set.
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

/// A compiled expression fragment and its placeholder tables.
///
/// The caller owns merging fragments into a request; each fragment is
/// immutable once compiled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledCondition {
    /// Clauses joined with `" and "` in predicate order, or empty when
    /// the input had no predicates.
    pub expression: String,
    /// `#token` to real attribute name, one entry per attribute.
    pub names: ExpressionAttributeNames,
    /// `:token` to wire value, one entry per attribute.
    pub values: ExpressionAttributeValues,
}

impl CompiledCondition {
    /// True when the input had no predicates. An empty expression must
    /// not be attached to a request; the store rejects empty strings
    /// where it would accept an absent field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }
}

/// Compile a predicate description into an expression fragment.
///
/// Each predicate renders one clause referencing a `#`/`:` token pair
/// derived from its attribute name; clauses join with `" and "` in input
/// order.
///
/// # Errors
///
/// Rejects attribute names that cannot form a placeholder token, the
/// same attribute constrained twice, with the input otherwise untouched.
pub fn compile(predicates: &Predicates) -> Result<CompiledCondition, ConditionError> {
    let triples = predicates.triples();

    let mut seen: HashSet<&str> = HashSet::with_capacity(triples.len());
    let mut clauses = Vec::with_capacity(triples.len());
    let mut names = ExpressionAttributeNames::with_capacity(triples.len());
    let mut values = ExpressionAttributeValues::with_capacity(triples.len());

    for (attribute, value, operator) in triples {
        validate_attribute_name(attribute)?;
        if !seen.insert(attribute) {
            return Err(ConditionError::DuplicateAttribute(attribute.to_owned()));
        }

        let name = format!("#{attribute}");
        let value_token = format!(":{attribute}");

        clauses.push(match operator.syntax() {
            Syntax::Infix => format!("{name} {operator} {value_token}"),
            Syntax::FunctionCall => format!("{operator}({name},{value_token})"),
        });

        names.insert(name, attribute.to_owned());
        values.insert(value_token, AttributeValue::from(value.clone()));
    }

    Ok(CompiledCondition {
        expression: clauses.join(CONNECTIVE),
        names,
        values,
    })
}

/// Attribute names are embedded verbatim in placeholder tokens, so only
/// characters legal in a token are accepted.
pub(crate) fn validate_attribute_name(attribute: &str) -> Result<(), ConditionError> {
    let legal = !attribute.is_empty()
        && attribute
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if legal {
        Ok(())
    } else {
        Err(ConditionError::InvalidAttributeName(attribute.to_owned()))
    }
}
