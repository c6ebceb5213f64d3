//! The channel seam and its HTTP implementation.
//!
//! A [`Channel`] carries one serialized operation payload to the store
//! and resolves with the raw response body. The document client is
//! written against the trait so tests can substitute a scripted channel
//! for the real network.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use reqwest::Url;
use tracing::debug;

use dynadoc_model::{Operation, StoreError};

use crate::credentials::Credentials;
use crate::error::TransportError;
use crate::signer::{self, SigningInput};

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Service name used in the credential scope.
const SERVICE: &str = "dynamodb";

/// Future resolved by [`Channel::send`].
pub type ChannelFuture = Pin<Box<dyn Future<Output = Result<Bytes, TransportError>> + Send>>;

/// Carries serialized operations to the store.
pub trait Channel: Send + Sync {
    /// Send one operation payload and resolve with the raw response body.
    fn send(&self, operation: Operation, payload: Bytes) -> ChannelFuture;
}

/// [`Channel`] over HTTP, speaking the store's signed JSON protocol.
///
/// Every operation is a `POST` to the endpoint root with the operation
/// named in `X-Amz-Target` and a SigV4 `Authorization` header covering
/// `content-type`, `host`, `x-amz-date`, and `x-amz-target`.
#[derive(Debug, Clone)]
pub struct HttpChannel {
    client: reqwest::Client,
    url: Url,
    host: String,
    region: String,
    credentials: Credentials,
    verify_checksums: bool,
}

impl HttpChannel {
    /// Build a channel for the given endpoint.
    pub fn new(
        endpoint: &str,
        region: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let url = Url::parse(endpoint).map_err(|e| TransportError::Endpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let host = host_header(&url).ok_or_else(|| TransportError::Endpoint {
            endpoint: endpoint.to_owned(),
            reason: "endpoint has no host".to_owned(),
        })?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            host,
            region: region.into(),
            credentials,
            verify_checksums: true,
        })
    }

    /// Enable or disable `x-amz-crc32` verification of response bodies.
    /// On by default.
    #[must_use]
    pub fn verify_checksums(mut self, verify: bool) -> Self {
        self.verify_checksums = verify;
        self
    }

    /// Assemble the signed header set for one request, `authorization`
    /// last.
    fn request_headers(
        &self,
        operation: Operation,
        payload: &[u8],
        timestamp: &str,
    ) -> Vec<(String, String)> {
        let mut headers = vec![
            ("content-type".to_owned(), CONTENT_TYPE.to_owned()),
            ("host".to_owned(), self.host.clone()),
            ("x-amz-date".to_owned(), timestamp.to_owned()),
            ("x-amz-target".to_owned(), operation.target().to_owned()),
        ];

        let signable: Vec<(&str, &str)> = headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let authorization = signer::sign_request(
            &SigningInput {
                method: "POST",
                path: self.url.path(),
                query: "",
                headers: &signable,
                payload,
                timestamp,
                region: &self.region,
                service: SERVICE,
            },
            &self.credentials,
        );

        headers.push(("authorization".to_owned(), authorization));
        headers
    }
}

impl Channel for HttpChannel {
    fn send(&self, operation: Operation, payload: Bytes) -> ChannelFuture {
        let channel = self.clone();
        Box::pin(async move {
            let timestamp = signer::amz_date(Utc::now());
            let headers = channel.request_headers(operation, &payload, &timestamp);
            debug!(%operation, bytes = payload.len(), "sending request");

            let mut request = channel.client.post(channel.url.clone()).body(payload);
            for (name, value) in &headers {
                // reqwest derives the Host header from the URL.
                if name != "host" {
                    request = request.header(name.as_str(), value.as_str());
                }
            }

            let response = request.send().await?;
            let status = response.status();
            let declared_crc = response
                .headers()
                .get("x-amz-crc32")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u32>().ok());
            let body = response.bytes().await?;

            if !status.is_success() {
                return Err(decode_failure(status.as_u16(), &body));
            }

            if channel.verify_checksums {
                if let Some(expected) = declared_crc {
                    let computed = crc32fast::hash(&body);
                    if computed != expected {
                        return Err(TransportError::ChecksumMismatch { expected, computed });
                    }
                }
            }

            debug!(%operation, status = status.as_u16(), bytes = body.len(), "received response");
            Ok(body)
        })
    }
}

/// The `Host` header value reqwest will derive from this URL.
fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

/// Decode a failed response into the most specific error available.
fn decode_failure(status: u16, body: &[u8]) -> TransportError {
    match StoreError::decode(body) {
        Some(error) => TransportError::Store(error),
        None => TransportError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
