//! Reusable HTTP call templates bound to one base URL and path pattern.
//!
//! An [`EndpointFactory`] owns the process-wide connection pool. Every
//! [`Endpoint`] it builds shares that pool, so clients can be constructed
//! freely and used concurrently without locking.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode, Url, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

use tariff_types::IntegrationError;

/// Per-request timeout used by [`EndpointFactory::new`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long an idle pooled connection is kept open.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Builds endpoints for a single base URL.
#[derive(Clone)]
pub struct EndpointFactory {
    base_url: String,
    client: Client,
}

impl EndpointFactory {
    /// Creates a factory with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, IntegrationError> {
        Self::with_timeouts(base_url, DEFAULT_REQUEST_TIMEOUT, DEFAULT_IDLE_TIMEOUT)
    }

    /// Creates a factory with a dedicated connection pool.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        request_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, IntegrationError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .pool_idle_timeout(idle_timeout)
            .build()
            .map_err(|e| IntegrationError::Config(e.to_string()))?;

        Ok(Self::with_client(base_url, client))
    }

    /// Creates a factory around an existing client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns an endpoint for `base_url + pattern`.
    ///
    /// The pattern may contain `{name}` placeholders, filled per call through
    /// [`RequestOptions::param`].
    pub fn build(&self, pattern: &str) -> Endpoint {
        Endpoint {
            base_url: self.base_url.clone(),
            pattern: pattern.trim_start_matches('/').to_string(),
            client: self.client.clone(),
        }
    }
}

/// Per-call path parameters, query string and JSON body.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a `{key}` placeholder. The value is percent-encoded.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((key.into(), value.into()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body sent with POST and PATCH.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, IntegrationError> {
        let bytes = serde_json::to_vec(body).map_err(|e| IntegrationError::Encode(e.to_string()))?;
        self.body = Some(bytes);
        Ok(self)
    }
}

/// A callable HTTP operation against one templated URL.
///
/// Calls return the raw [`Response`]; status codes are not interpreted here.
/// A returned `Err` always means no response was received.
#[derive(Clone)]
pub struct Endpoint {
    base_url: String,
    pattern: String,
    client: Client,
}

impl Endpoint {
    pub async fn get(&self, opts: RequestOptions) -> Result<Response, IntegrationError> {
        self.send(Method::GET, opts).await
    }

    pub async fn post(&self, opts: RequestOptions) -> Result<Response, IntegrationError> {
        self.send(Method::POST, opts).await
    }

    pub async fn patch(&self, opts: RequestOptions) -> Result<Response, IntegrationError> {
        self.send(Method::PATCH, opts).await
    }

    /// Resolves the final URL for a call.
    pub fn url(&self, opts: &RequestOptions) -> Result<Url, IntegrationError> {
        let mut path = self.pattern.clone();
        for (key, value) in &opts.path_params {
            path = path.replace(&format!("{{{key}}}"), &urlencoding::encode(value));
        }

        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| IntegrationError::Config(format!("invalid URL: {e}")))?;

        if !opts.query.is_empty() {
            url.query_pairs_mut().extend_pairs(opts.query.iter());
        }

        Ok(url)
    }

    async fn send(&self, method: Method, opts: RequestOptions) -> Result<Response, IntegrationError> {
        let url = self.url(&opts)?;
        tracing::debug!(%method, %url, "calling downstream endpoint");

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = opts.body {
            request = request.body(body);
        }

        request.send().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> IntegrationError {
    if err.is_timeout() {
        IntegrationError::Transport(format!("request timed out: {err}"))
    } else {
        IntegrationError::Transport(err.to_string())
    }
}

/// Passes the response through if its status is one of `expected`, otherwise
/// turns it into [`IntegrationError::Http`] carrying the raw body text.
pub async fn expect_status(
    response: Response,
    expected: &[StatusCode],
) -> Result<Response, IntegrationError> {
    let status = response.status();
    if expected.contains(&status) {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
    Err(IntegrationError::Http {
        status: status.as_u16(),
        body,
    })
}

/// Reads the whole body and decodes it as JSON.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IntegrationError> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| IntegrationError::Decode(e.to_string()))
}
