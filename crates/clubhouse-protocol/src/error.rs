//! Error types for the protocol layer.
//!
//! Each crate in Clubhouse defines its own error enum. A `ProtocolError`
//! always means the server answered, but the answer could not be turned
//! into the shape the client expected.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of a request body failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The response body was not valid JSON for the expected type.
    ///
    /// Common causes: an HTML error page from a proxy, a renamed field,
    /// or a truncated body.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The body decoded, but a field the client relies on was absent.
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}
