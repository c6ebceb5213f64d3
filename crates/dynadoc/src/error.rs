//! Client error type.

use dynadoc_http::TransportError;
use dynadoc_model::{DocumentError, Operation, StoreError};

use crate::condition::ConditionError;

/// Errors surfaced by the document client.
///
/// Store-reported failures pass through unmodified inside
/// [`Error::Transport`]; this layer adds no retries and no translation
/// beyond preserving the store's code and message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A predicate description failed to compile.
    #[error(transparent)]
    Condition(#[from] ConditionError),

    /// A document could not be converted to wire form.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The transport failed or the store rejected the request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Two expression fragments of one request generated the same token.
    #[error("placeholder {0:?} generated by more than one expression in the request")]
    PlaceholderCollision(String),

    /// A request payload could not be serialized.
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        /// The operation being issued.
        operation: Operation,
        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// A response body could not be deserialized.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// The operation that was issued.
        operation: Operation,
        /// The underlying deserializer error.
        source: serde_json::Error,
    },
}

impl Error {
    /// The store's error envelope, when this error carries one.
    #[must_use]
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Transport(transport) => transport.as_store_error(),
            _ => None,
        }
    }

    /// True when a conditional write guard rejected the request.
    #[must_use]
    pub fn is_conditional_check_failed(&self) -> bool {
        self.as_store_error()
            .is_some_and(StoreError::is_conditional_check_failed)
    }
}
