/// Errors that can occur in the transport layer.
///
/// Every variant means the request never produced an HTTP status. A
/// server that answers with 4xx/5xx is NOT a transport error: that
/// response is handed back as an [`ApiResponse`](crate::ApiResponse)
/// and the caller decides what the status means.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("transport setup failed: {0}")]
    Setup(String),

    /// The server could not be reached (DNS, refused, timed out).
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The request was sent but the exchange failed midway.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The status line arrived but the body could not be read.
    #[error("failed to read response body: {0}")]
    BodyFailed(String),
}
