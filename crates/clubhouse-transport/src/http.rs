//! HTTPS transport implementation using `reqwest`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::{ApiRequest, ApiResponse, Method, Transport, TransportError};

/// A `reqwest`-backed [`Transport`] bound to one API base URL.
///
/// Cloning is cheap: `reqwest::Client` is an `Arc` around its
/// connection pool, so clones share connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a transport for `base_url`, optionally bounding every
    /// request by `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!(%base_url, ?timeout, "HTTP transport ready");

        Ok(Self { client, base_url })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);

        // The API parses every POST as JSON, bodiless ones included.
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "application/json"),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::BodyFailed(e.to_string()))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "API request completed"
        );

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        TransportError::Unreachable(err.to_string())
    } else {
        TransportError::RequestFailed(err.to_string())
    }
}
