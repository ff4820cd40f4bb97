//! `ClubClient` builder and facade.
//!
//! This is the entry point for talking to the club site. It ties together
//! all the layers: transport → protocol → session → views.

use std::sync::Arc;

use clubhouse_protocol::{Album, Credentials, Event, EventId, Member, MembershipResponse, RegisterData};
use clubhouse_session::{FileStore, MemoryStore, Session, SessionManager, SessionStore};
use clubhouse_transport::{HttpTransport, Transport};
use clubhouse_views::{EventsView, Fetcher, GalleryView};
use tokio::sync::watch;

use crate::{ClientConfig, ClubhouseError};

/// The session store a configured client persists to: a file, or memory
/// when no file is configured.
pub type DynStore = Box<dyn SessionStore>;

/// Builder for a [`ClubClient`] over HTTP.
///
/// # Example
///
/// ```rust,no_run
/// use clubhouse::prelude::*;
///
/// # fn main() -> Result<(), ClubhouseError> {
/// let client = ClubClient::builder()
///     .config(ClientConfig::default().in_memory())
///     .build()?;
/// assert!(!client.session().is_authenticated());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClubClientBuilder {
    config: ClientConfig,
}

impl ClubClientBuilder {
    /// Creates a builder with [`ClientConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.api_url(url);
        self
    }

    /// Builds the transport and the store, then restores the session.
    ///
    /// # Errors
    /// Returns [`ClubhouseError::Transport`] if the HTTP client cannot be
    /// set up.
    pub fn build(self) -> Result<ClubClient<HttpTransport, DynStore>, ClubhouseError> {
        let transport = HttpTransport::with_timeout(&self.config.api_url, self.config.timeout)?;
        let store: DynStore = match &self.config.session_file {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        };
        tracing::info!(
            api_url = %self.config.api_url,
            session_file = ?self.config.session_file,
            "club client ready"
        );
        Ok(ClubClient::from_parts(Arc::new(transport), store))
    }
}

/// One signed-in (or anonymous) user of the club site.
///
/// Holds the shared transport and the one [`SessionManager`]; views made
/// from it watch that manager's session.
pub struct ClubClient<T, S> {
    transport: Arc<T>,
    sessions: Arc<SessionManager<T, S>>,
}

impl ClubClient<HttpTransport, DynStore> {
    /// Creates a builder.
    pub fn builder() -> ClubClientBuilder {
        ClubClientBuilder::new()
    }
}

impl<T: Transport, S: SessionStore> ClubClient<T, S> {
    /// Assembles a client from a transport and a store of your choice,
    /// restoring whatever session the store holds.
    pub fn from_parts(transport: Arc<T>, store: S) -> Self {
        let sessions = Arc::new(SessionManager::restore(Arc::clone(&transport), store));
        Self {
            transport,
            sessions,
        }
    }

    /// The session manager, for sharing with other tasks.
    pub fn sessions(&self) -> &Arc<SessionManager<T, S>> {
        &self.sessions
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.sessions.session()
    }

    /// The signed-in member, if any.
    pub fn member(&self) -> Option<Member> {
        self.sessions.member()
    }

    /// Subscribes to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sessions.subscribe()
    }

    pub async fn register(&self, data: &RegisterData) -> Result<(), ClubhouseError> {
        Ok(self.sessions.register(data).await?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Member, ClubhouseError> {
        Ok(self.sessions.login(credentials).await?)
    }

    pub fn logout(&self) {
        self.sessions.logout();
    }

    /// A fetcher over this client's transport.
    pub fn fetcher(&self) -> Fetcher<T> {
        Fetcher::new(Arc::clone(&self.transport))
    }

    /// Fetches every event once, without a view.
    pub async fn events(&self) -> Result<Vec<Event>, ClubhouseError> {
        Ok(self.fetcher().fetch_collection::<Event>().await?)
    }

    /// Fetches every album once, without a view.
    pub async fn gallery(&self) -> Result<Vec<Album>, ClubhouseError> {
        Ok(self.fetcher().fetch_collection::<Album>().await?)
    }

    /// Joins an event as the signed-in member.
    pub async fn join(&self, id: &EventId) -> Result<MembershipResponse, ClubhouseError> {
        let token = self.sessions.token();
        Ok(self.fetcher().join_event(token.as_deref(), id).await?)
    }

    /// Leaves an event as the signed-in member.
    pub async fn leave(&self, id: &EventId) -> Result<MembershipResponse, ClubhouseError> {
        let token = self.sessions.token();
        Ok(self.fetcher().leave_event(token.as_deref(), id).await?)
    }

    /// A new, unmounted events view bound to this client's session.
    pub fn events_view(&self) -> EventsView<T> {
        EventsView::new(Arc::clone(&self.transport), self.sessions.subscribe())
    }

    /// A new, unmounted gallery view.
    pub fn gallery_view(&self) -> GalleryView<T> {
        GalleryView::new(Arc::clone(&self.transport))
    }
}
