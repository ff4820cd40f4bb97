//! Error types for the view layer.

use clubhouse_protocol::ProtocolError;
use clubhouse_transport::TransportError;

/// Errors from fetching a read-only collection (events, albums).
///
/// Views never surface these directly: they become
/// [`ViewState::Failed`](crate::ViewState::Failed) with a generic message
/// and this error's `Display` as the detail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server could not be reached.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("server answered with status {0}")]
    Status(u16),

    /// The body was not the expected list.
    #[error("unexpected response: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors from joining or leaving an event.
#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    /// No one is signed in. Raised before any request is sent.
    #[error("sign-in required")]
    NotAuthenticated,

    /// The server refused (event full, already registered, bad token...).
    /// Carries the server's message, shown as-is.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The server could not be reached.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// A 2xx answer without the `{ message, event }` shape.
    #[error("unexpected response: {0}")]
    Protocol(#[from] ProtocolError),
}
