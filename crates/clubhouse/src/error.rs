//! Unified error type for the Clubhouse client.

use clubhouse_protocol::ProtocolError;
use clubhouse_session::{SessionError, StoreError};
use clubhouse_transport::TransportError;
use clubhouse_views::{FetchError, MembershipError};

/// Top-level error that wraps all crate-specific errors.
///
/// Through the `clubhouse` facade you only deal with this type; `?`
/// converts the layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ClubhouseError {
    /// Transport setup or connectivity.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Encoding or decoding a body.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Register or login failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The session file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Loading events or albums failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Joining or leaving an event failed.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}
