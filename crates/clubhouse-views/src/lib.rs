//! Session-aware views for Clubhouse.
//!
//! The view layer turns remote collections and the current session into
//! what a front end shows:
//!
//! - [`Fetcher`]: one-shot requests: list a [`Collection`], join/leave
//! - [`CollectionView`]: a mounted fetch published as [`ViewState`]
//! - [`EventsView`]: events with membership buttons and join/leave
//! - [`GalleryView`]: albums, filterable by activity
//! - [`MembershipButton`], [`schedule`], [`catalog`]: pure helpers
//!
//! # How it fits in the stack
//!
//! ```text
//! Front end (above)  ← renders ViewState, buttons, notices
//!     ↕
//! View Layer (this crate)  ← fetch, merge, decide affordances
//!     ↕
//! Session Layer (below)  ← Session (watched), bearer token
//! ```

mod error;
mod events;
mod fetcher;
mod gallery;
mod membership;
mod notice;
mod view;

pub mod catalog;
pub mod schedule;

pub use error::{FetchError, MembershipError};
pub use events::{ButtonOutcome, EventsView};
pub use fetcher::{Collection, Fetcher};
pub use gallery::{GalleryView, filter_by_activity};
pub use membership::{ButtonAction, FULL_LABEL, JOIN_LABEL, LEAVE_LABEL, MembershipButton};
pub use notice::{MembershipAction, Notice, Tone};
pub use view::{CollectionView, ViewState};
