//! # Clubhouse
//!
//! Client for the science-and-technology club's community site.
//!
//! Clubhouse keeps track of who is signed in (persisted across runs),
//! loads the club's events and gallery, and decides what each visitor
//! may do with an event: join it, leave it, or sign up first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clubhouse::prelude::*;
//!
//! # async fn run() -> Result<(), ClubhouseError> {
//! clubhouse::init_tracing();
//! let client = ClubClient::builder()
//!     .config(ClientConfig::from_env()?)
//!     .build()?;
//!
//! client.login(&Credentials::new("alice", "secret")).await?;
//!
//! let events = client.events_view();
//! events.mount();
//! events.settled().await;
//! for event in events.events() {
//!     println!("{}: {}", event.title, events.button_for(&event).label);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod logging;

pub use client::{ClubClient, ClubClientBuilder, DynStore};
pub use config::{
    API_URL_ENV, ClientConfig, DEFAULT_API_URL, SESSION_FILE_ENV, TIMEOUT_ENV,
    default_session_file,
};
pub use error::ClubhouseError;
pub use logging::{DEFAULT_FILTER, init_tracing};

pub use clubhouse_protocol as protocol;
pub use clubhouse_session as session;
pub use clubhouse_transport as transport;
pub use clubhouse_views as views;

/// Common imports for Clubhouse users.
///
/// ```rust
/// use clubhouse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ClientConfig, ClubClient, ClubhouseError, init_tracing};
    pub use clubhouse_protocol::{
        Activity, Album, Credentials, Event, EventId, Member, MemberId, RegisterData,
    };
    pub use clubhouse_session::{FileStore, MemoryStore, Session, SessionManager, SessionStore};
    pub use clubhouse_transport::{HttpTransport, Transport};
    pub use clubhouse_views::{
        ButtonAction, ButtonOutcome, EventsView, GalleryView, MembershipButton, Notice, Tone,
        ViewState,
    };
}
