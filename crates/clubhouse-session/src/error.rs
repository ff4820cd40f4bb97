//! Error types for the session layer.

use clubhouse_protocol::ProtocolError;
use clubhouse_transport::TransportError;

/// Errors returned by the [`SessionManager`](crate::SessionManager)
/// operations.
///
/// None of these leave a half-updated session behind: whenever one is
/// returned, the session is exactly what it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The server refused the sign-up (duplicate username, bad national
    /// id, ...). Carries the server's message when it sent one.
    #[error("registration failed: {0}")]
    Registration(String),

    /// The server refused the credentials. Carries the server's reason.
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// The server said yes but the answer lacked a token or a member, or
    /// was not decodable. Treated as a server bug.
    #[error("unusable login response: {0}")]
    AuthProtocol(#[source] ProtocolError),

    /// The server could not be reached.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(#[source] ProtocolError),
}

impl SessionError {
    /// A message fit to show the person at the keyboard.
    ///
    /// Server rejections are shown verbatim; everything else gets a
    /// generic text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Registration(msg) | Self::LoginRejected(msg) => msg.clone(),
            Self::Network(_) => {
                "Impossible de contacter le serveur. Veuillez réessayer.".to_string()
            }
            Self::AuthProtocol(_) | Self::Encode(_) => {
                "Réponse inattendue du serveur. Veuillez réessayer plus tard.".to_string()
            }
        }
    }
}

/// Errors raised by a [`SessionStore`](crate::SessionStore) backend.
///
/// The manager never propagates these: a store that cannot be read or
/// written degrades to a signed-out session and a warning in the logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be serialized.
    #[error("session could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    /// A previous holder of the store's lock panicked.
    #[error("session storage lock poisoned")]
    Poisoned,
}
