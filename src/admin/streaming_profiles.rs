//! Streaming profile operations
//!
//! Public surface for the `streaming_profiles` collection: create, get,
//! list, update, delete. Stateless; every operation is a single signed
//! round trip, so one client can be shared freely across tasks.
//!
//! The service ships predefined profiles ("4k", "full_hd", "hd", "sd" and
//! variants). They show up in `list` and `get` like any other profile but
//! cannot be created or deleted from here.

use std::sync::Arc;

use tracing::debug;

use crate::auth::{BasicAuthSigner, RequestSigner};
use crate::config::ApiConfig;
use crate::error::AdminError;
use crate::transformation::Representation;
use crate::transport::{HttpTransport, Transport};

use super::request::{ApiRequest, Options};
use super::response::{ApiResponse, interpret};

/// Admin client for streaming profiles.
pub struct StreamingProfileClient {
    transport: Arc<dyn Transport>,
    signer: Arc<dyn RequestSigner>,
}

impl StreamingProfileClient {
    /// Build a client on the production transport and basic-auth signer.
    pub fn new(config: &ApiConfig) -> Result<Self, AdminError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
            signer: Arc::new(BasicAuthSigner::from_config(config)),
        })
    }

    /// Build a client from explicit collaborators (tests, alternative
    /// signing schemes).
    #[must_use]
    pub fn with_collaborators(
        transport: Arc<dyn Transport>,
        signer: Arc<dyn RequestSigner>,
    ) -> Self {
        Self { transport, signer }
    }

    /// Create a named profile.
    ///
    /// Fails with [`AdminError::AlreadyExists`] when a profile with that
    /// name exists server-side; callers implementing create-or-update
    /// match that variant and fall through to [`update`](Self::update).
    pub async fn create(
        &self,
        name: &str,
        display_name: Option<&str>,
        representations: &[Representation],
        options: Options,
    ) -> Result<ApiResponse, AdminError> {
        debug!(profile = name, "Creating streaming profile");
        let request =
            ApiRequest::create_streaming_profile(name, display_name, representations, options)?;
        self.run(request).await
    }

    /// Fetch a single profile by name.
    pub async fn get(&self, name: &str) -> Result<ApiResponse, AdminError> {
        let request = ApiRequest::get_streaming_profile(name)?;
        self.run(request).await
    }

    /// List all profiles, predefined and user-created. Order is whatever
    /// the server returns.
    pub async fn list(&self) -> Result<ApiResponse, AdminError> {
        self.run(ApiRequest::list_streaming_profiles()).await
    }

    /// Replace a profile's representation set.
    ///
    /// The service treats the submitted `representations` as a full
    /// replacement, not a merge. Success carries `message == "updated"`.
    pub async fn update(
        &self,
        name: &str,
        display_name: Option<&str>,
        representations: &[Representation],
        options: Options,
    ) -> Result<ApiResponse, AdminError> {
        debug!(profile = name, "Updating streaming profile");
        let request =
            ApiRequest::update_streaming_profile(name, display_name, representations, options)?;
        self.run(request).await
    }

    /// Delete a profile. The envelope carries the resource's last known
    /// representation.
    pub async fn delete(&self, name: &str) -> Result<ApiResponse, AdminError> {
        debug!(profile = name, "Deleting streaming profile");
        let request = ApiRequest::delete_streaming_profile(name)?;
        self.run(request).await
    }

    async fn run(&self, request: ApiRequest) -> Result<ApiResponse, AdminError> {
        let headers = self.signer.sign(&request)?;
        let raw = self.transport.execute(&request, headers).await?;
        interpret(raw.status, &raw.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::new("demo", "key", "secret").unwrap();
        assert!(StreamingProfileClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StreamingProfileClient>();
    }
}
