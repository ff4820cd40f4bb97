//! Wire protocol for the Clubhouse API client.
//!
//! This crate defines the "language" the client and the club server speak:
//!
//! - **Types** ([`Event`], [`Album`], [`Member`], etc.): the JSON
//!   documents that travel on the wire.
//! - **Endpoints** ([`Endpoint`]): the route table, with each route's
//!   method, path, and whether a bearer token is required.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how bodies are turned
//!   into bytes and back.
//! - **Errors** ([`ProtocolError`]): what can go wrong when the server's
//!   answer doesn't have the expected shape.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw requests) and the
//! session/view layers (who is signed in, what is on screen). It does
//! not send anything itself.
//!
//! ```text
//! Transport (ApiRequest/ApiResponse) → Protocol (Event, Member, ...) → Session / Views
//! ```

mod codec;
mod endpoint;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use endpoint::Endpoint;
pub use error::ProtocolError;
pub use types::{
    Activity, Album, AlbumId, Credentials, ErrorBody, Event, EventId, EventPatch, ImageId,
    LoginResponse, Member, MemberId, MembershipResponse, RegisterData, parse_date,
};
