//! Request signing
//!
//! The admin API authenticates every request with the account's API key and
//! secret. The signer is kept behind a trait so the client only ever sees a
//! function from a request skeleton to authentication headers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::admin::request::ApiRequest;
use crate::config::ApiConfig;
use crate::error::AdminError;

/// Produces per-request authentication material.
pub trait RequestSigner: Send + Sync {
    /// Build the headers carrying authentication for `request`.
    fn sign(&self, request: &ApiRequest) -> Result<HeaderMap, AdminError>;
}

/// HTTP Basic signer (`api_key:api_secret`), the scheme the hosted admin
/// API uses.
pub struct BasicAuthSigner {
    api_key: String,
    api_secret: String,
}

impl BasicAuthSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.api_key, &config.api_secret)
    }
}

impl RequestSigner for BasicAuthSigner {
    fn sign(&self, _request: &ApiRequest) -> Result<HeaderMap, AdminError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token = BASE64.encode(format!("{}:{}", self.api_key, self.api_secret));
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        Ok(headers)
    }
}
