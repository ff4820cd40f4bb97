//! Member session management for Clubhouse.
//!
//! This crate owns the answer to "who is signed in?":
//!
//! 1. **Session**: [`Session`] is either anonymous or a token together
//!    with the member it belongs to
//! 2. **Persistence**: a [`SessionStore`] keeps the session across runs
//!    ([`MemoryStore`], [`FileStore`])
//! 3. **Transitions**: [`SessionManager`] registers, logs in, logs out,
//!    and publishes every change on a watch channel
//!
//! # How it fits in the stack
//!
//! ```text
//! Views (above)  ← read the token for join/leave, watch the session for affordances
//!     ↕
//! Session Layer (this crate)  ← login/logout state machine + persistence
//!     ↕
//! Protocol Layer (below)  ← Member, Credentials, Endpoint, JsonCodec
//! ```

mod error;
mod manager;
mod session;
pub mod store;

pub use error::{SessionError, StoreError};
pub use manager::SessionManager;
pub use session::{Session, SessionState, StoredSession};
pub use store::{FileStore, MemoryStore, SessionStore};
