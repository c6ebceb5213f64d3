//! Store error envelope decoding.
//!
//! Failed requests carry a JSON body like
//! `{"__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
//! "Message": "..."}`. The code is the fragment after `#`; some error
//! families use other namespaces (validation errors arrive as
//! `com.amazon.coral.validate#ValidationException`), so only the fragment
//! is significant.

use std::fmt;

use serde::Deserialize;

/// Well-known store error codes.
///
/// Codes outside this set are preserved verbatim in `Unknown` so callers
/// can still match on the raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// A conditional write guard evaluated to false.
    ConditionalCheckFailedException,
    /// The referenced table or index does not exist.
    ResourceNotFoundException,
    /// The referenced table is being created or deleted.
    ResourceInUseException,
    /// The request was malformed or violated a store constraint.
    ValidationException,
    /// Provisioned throughput was exceeded.
    ProvisionedThroughputExceededException,
    /// The request rate is too high.
    ThrottlingException,
    /// The account request limit was reached.
    RequestLimitExceeded,
    /// An item collection grew too large.
    ItemCollectionSizeLimitExceededException,
    /// The request conflicted with an ongoing transaction.
    TransactionConflictException,
    /// The request body could not be parsed by the store.
    SerializationException,
    /// The request was not authorized.
    AccessDeniedException,
    /// The credentials were not recognized.
    UnrecognizedClientException,
    /// The store encountered an internal error.
    InternalServerError,
    /// Any code not in the well-known set.
    Unknown(String),
}

impl StoreErrorCode {
    /// Returns the wire code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ResourceInUseException => "ResourceInUseException",
            Self::ValidationException => "ValidationException",
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::ThrottlingException => "ThrottlingException",
            Self::RequestLimitExceeded => "RequestLimitExceeded",
            Self::ItemCollectionSizeLimitExceededException => {
                "ItemCollectionSizeLimitExceededException"
            }
            Self::TransactionConflictException => "TransactionConflictException",
            Self::SerializationException => "SerializationException",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
            Self::InternalServerError => "InternalServerError",
            Self::Unknown(code) => code,
        }
    }

    /// Parses a `__type` field value into a code.
    ///
    /// The namespace prefix up to and including `#` is discarded; a bare
    /// code without a namespace is accepted as-is.
    #[must_use]
    pub fn parse_type(type_field: &str) -> Self {
        let code = match type_field.rsplit_once('#') {
            Some((_, fragment)) => fragment,
            None => type_field,
        };
        match code {
            "ConditionalCheckFailedException" => Self::ConditionalCheckFailedException,
            "ResourceNotFoundException" => Self::ResourceNotFoundException,
            "ResourceInUseException" => Self::ResourceInUseException,
            "ValidationException" => Self::ValidationException,
            "ProvisionedThroughputExceededException" => {
                Self::ProvisionedThroughputExceededException
            }
            "ThrottlingException" => Self::ThrottlingException,
            "RequestLimitExceeded" => Self::RequestLimitExceeded,
            "ItemCollectionSizeLimitExceededException" => {
                Self::ItemCollectionSizeLimitExceededException
            }
            "TransactionConflictException" => Self::TransactionConflictException,
            "SerializationException" => Self::SerializationException,
            "AccessDeniedException" => Self::AccessDeniedException,
            "UnrecognizedClientException" => Self::UnrecognizedClientException,
            "InternalServerError" => Self::InternalServerError,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded store error response.
///
/// `Display` leads with the code string so callers can match on
/// substrings like `"ConditionalCheckFailedException"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The error code.
    pub code: StoreErrorCode,
    /// The human-readable message, when the store provided one.
    pub message: Option<String>,
}

impl StoreError {
    /// Creates a store error with a message.
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }

    /// Decodes a store error from a response body.
    ///
    /// Returns `None` when the body is not a recognizable error envelope;
    /// the transport layer reports those with their HTTP status instead.
    #[must_use]
    pub fn decode(body: &[u8]) -> Option<Self> {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
        let type_field = envelope.error_type?;
        Some(Self {
            code: StoreErrorCode::parse_type(&type_field),
            message: envelope.message,
        })
    }

    /// Returns true when a conditional write guard rejected the request.
    #[must_use]
    pub fn is_conditional_check_failed(&self) -> bool {
        self.code == StoreErrorCode::ConditionalCheckFailedException
    }

    /// Returns true when the referenced table or index does not exist.
    #[must_use]
    pub fn is_resource_not_found(&self) -> bool {
        self.code == StoreErrorCode::ResourceNotFoundException
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_code_from_namespaced_type() {
        let code = StoreErrorCode::parse_type(
            "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
        );
        assert_eq!(code, StoreErrorCode::ResourceNotFoundException);
    }

    #[test]
    fn test_should_parse_validation_error_from_coral_namespace() {
        let code = StoreErrorCode::parse_type("com.amazon.coral.validate#ValidationException");
        assert_eq!(code, StoreErrorCode::ValidationException);
    }

    #[test]
    fn test_should_parse_bare_code_without_namespace() {
        let code = StoreErrorCode::parse_type("ConditionalCheckFailedException");
        assert_eq!(code, StoreErrorCode::ConditionalCheckFailedException);
    }

    #[test]
    fn test_should_preserve_unknown_code() {
        let code = StoreErrorCode::parse_type("com.amazonaws.dynamodb.v20120810#SomeNewError");
        assert_eq!(code, StoreErrorCode::Unknown("SomeNewError".to_owned()));
        assert_eq!(code.as_str(), "SomeNewError");
    }

    #[test]
    fn test_should_decode_error_envelope() {
        let body = br#"{"__type":"com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException","Message":"The conditional request failed"}"#;
        let err = StoreError::decode(body).unwrap();
        assert!(err.is_conditional_check_failed());
        assert_eq!(err.message.as_deref(), Some("The conditional request failed"));
    }

    #[test]
    fn test_should_decode_lowercase_message_field() {
        let body = br#"{"__type":"com.amazon.coral.validate#ValidationException","message":"One or more parameter values were invalid"}"#;
        let err = StoreError::decode(body).unwrap();
        assert_eq!(err.code, StoreErrorCode::ValidationException);
        assert!(err.message.is_some());
    }

    #[test]
    fn test_should_return_none_for_unrecognizable_body() {
        assert!(StoreError::decode(b"<html>nope</html>").is_none());
        assert!(StoreError::decode(br#"{"ok":true}"#).is_none());
    }

    #[test]
    fn test_should_display_code_then_message() {
        let err = StoreError::new(
            StoreErrorCode::ConditionalCheckFailedException,
            "The conditional request failed",
        );
        let text = err.to_string();
        assert!(text.starts_with("ConditionalCheckFailedException"));
        assert!(text.contains("The conditional request failed"));
    }
}
