//! Transport error type.

use dynadoc_model::StoreError;

/// Errors raised while carrying a request to the store.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The endpoint URL could not be used.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    Endpoint {
        /// The endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP exchange itself failed.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with an error envelope.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A non-success status whose body was not a store error envelope.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, lossily decoded.
        body: String,
    },

    /// The response body does not match its `x-amz-crc32` header.
    #[error("response crc32 mismatch: header says {expected}, body hashes to {computed}")]
    ChecksumMismatch {
        /// The checksum the store declared.
        expected: u32,
        /// The checksum of the body actually received.
        computed: u32,
    },
}

impl TransportError {
    /// The decoded store error, when this is one.
    #[must_use]
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store(error) => Some(error),
            _ => None,
        }
    }
}
