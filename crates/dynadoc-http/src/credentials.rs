//! Access credentials for request signing.

use std::fmt;

/// A static access-key pair.
///
/// Local stores accept any pair as long as the request signature is well
/// formed, so placeholder values work against them; real deployments
/// take the pair from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The access key ID carried in the credential scope.
    pub access_key_id: String,
    /// The secret key the signing key is derived from.
    pub secret_access_key: String,
}

impl Credentials {
    /// Credentials from an explicit pair.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Credentials from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`,
    /// when both are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        Some(Self {
            access_key_id,
            secret_access_key,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}
