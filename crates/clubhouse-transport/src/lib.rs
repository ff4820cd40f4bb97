//! Transport abstraction layer for Clubhouse.
//!
//! Provides the [`Transport`] trait that abstracts over how an API request
//! reaches the club server, together with the plain request/response
//! values that cross it. Everything above this crate speaks in
//! [`ApiRequest`] and [`ApiResponse`]; only the transport knows about
//! URLs, headers, and sockets.
//!
//! # Feature Flags
//!
//! - `http` (default): HTTPS transport via `reqwest`

mod error;
#[cfg(feature = "http")]
mod http;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;

use std::fmt;
use std::future::Future;

/// The HTTP methods the club API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request to the club API, relative to the transport's base URL.
///
/// `body` holds already-encoded JSON. Transports add the
/// `Content-Type: application/json` header whenever a body is present.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the base URL, always starting with `/`.
    pub path: String,
    /// Bearer token for protected routes.
    pub bearer: Option<String>,
    /// Encoded JSON body.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Creates a GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    /// Creates a POST request for `path` with no body.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    /// Attaches a bearer token.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Attaches an encoded JSON body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

// The bearer token and body may carry credentials, so they never reach logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// A response from the club API: the status code and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body (usually JSON, possibly empty).
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends API requests to the club server.
///
/// The returned future must be `Send` so callers can drive it from a
/// spawned Tokio task (views fetch their collections that way).
///
/// Implementations return `Ok` for every response that carried an HTTP
/// status, including 4xx and 5xx. `Err` is reserved for requests that
/// never got an answer.
pub trait Transport: Send + Sync + 'static {
    /// Sends one request and waits for the full response.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_api_request_builders_set_fields() {
        let req = ApiRequest::post("/events/join/E1")
            .with_bearer("t1")
            .with_body(b"{}".to_vec());

        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/events/join/E1");
        assert_eq!(req.bearer.as_deref(), Some("t1"));
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn test_api_request_get_has_no_body_or_bearer() {
        let req = ApiRequest::get("/events");
        assert_eq!(req.method, Method::Get);
        assert!(req.bearer.is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_api_request_debug_redacts_secrets() {
        let req = ApiRequest::post("/members/login/")
            .with_bearer("super-secret-token")
            .with_body(br#"{"password":"hunter2"}"#.to_vec());

        let printed = format!("{req:?}");

        assert!(!printed.contains("super-secret-token"));
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("/members/login/"));
    }

    #[test]
    fn test_api_response_is_success_covers_2xx_only() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(201, "").is_success());
        assert!(ApiResponse::new(299, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(300, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }
}
