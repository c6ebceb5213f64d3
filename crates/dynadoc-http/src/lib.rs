//! Signed HTTP transport for the dynadoc document-store client.
//!
//! This crate carries serialized operations to a DynamoDB-compatible
//! document store. It is split from the document client so request
//! signing and framing can be tested without a network:
//!
//! - [`channel`]: the [`Channel`] seam and its HTTP implementation
//! - [`signer`] and [`canonical`]: AWS Signature Version 4 signing
//! - [`credentials`]: the static access-key pair requests are signed with

pub mod canonical;
pub mod channel;
pub mod credentials;
pub mod error;
pub mod signer;

pub use channel::{CONTENT_TYPE, Channel, ChannelFuture, HttpChannel};
pub use credentials::Credentials;
pub use error::TransportError;
pub use signer::{SigningInput, hash_payload, sign_request};
