//! HTTP transport
//!
//! Executes request descriptions against the remote endpoint. The trait is
//! the seam integration tests stub out; `HttpTransport` is the production
//! implementation on top of a shared pooled reqwest client.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use url::Url;

use crate::admin::request::{ApiRequest, Method};
use crate::config::ApiConfig;
use crate::error::{AdminError, MAX_RESPONSE_SIZE};

/// Shared HTTP client for all admin requests (connection pooling).
/// Redirects are disabled so responses are always classified against the
/// endpoint that was actually addressed.
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build shared admin HTTP client")
});

/// Raw transport result: status and body, nothing interpreted.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The wire seam. Implementations execute a signed request description and
/// hand back whatever the service answered, without inspecting it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: &ApiRequest,
        headers: HeaderMap,
    ) -> Result<RawResponse, AdminError>;
}

/// Production transport (reuses the shared connection pool).
#[derive(Debug)]
pub struct HttpTransport {
    account_root: Url,
    client: Client,
}

impl HttpTransport {
    /// Build a transport rooted at `{api_base}/v1_1/{cloud_name}/`.
    pub fn new(config: &ApiConfig) -> Result<Self, AdminError> {
        let root = format!(
            "{}/v1_1/{}/",
            config.api_base.trim_end_matches('/'),
            config.cloud_name
        );
        let account_root = Url::parse(&root)
            .map_err(|e| AdminError::InvalidConfig(format!("Invalid API base: {e}")))?;
        Ok(Self {
            account_root,
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Resolve the request path against the account root. Segments are
    /// percent-encoded, so resource names cannot escape the collection.
    fn endpoint(&self, request: &ApiRequest) -> Result<Url, AdminError> {
        let mut url = self.account_root.clone();
        url.path_segments_mut()
            .map_err(|()| AdminError::InvalidConfig("API base cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(request.path_segments());
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &ApiRequest,
        headers: HeaderMap,
    ) -> Result<RawResponse, AdminError> {
        let url = self.endpoint(request)?;
        let mut builder = match request.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url).json(request.params()),
            Method::Put => self.client.put(url).json(request.params()),
            Method::Delete => self.client.delete(url),
        };
        if matches!(request.method(), Method::Get | Method::Delete) && !request.params().is_empty()
        {
            builder = builder.query(request.params());
        }

        let response = builder.headers(headers).send().await?;
        let status = response.status().as_u16();
        let body = body_with_limit(response).await?;
        Ok(RawResponse { status, body })
    }
}

/// Read a response body with a size limit.
///
/// Checks the `Content-Length` hint first (if available), then enforces
/// the limit on the actual body bytes.
async fn body_with_limit(response: reqwest::Response) -> Result<Vec<u8>, AdminError> {
    if let Some(content_length) = response.content_length() {
        if content_length as usize > MAX_RESPONSE_SIZE {
            return Err(AdminError::ResponseTooLarge {
                size: content_length,
            });
        }
    }
    let bytes = response.bytes().await?;
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(AdminError::ResponseTooLarge {
            size: bytes.len() as u64,
        });
    }
    Ok(bytes.to_vec())
}
