//! The session manager: who is signed in, and how that changes.
//!
//! This is the central piece of the session layer. It's responsible for:
//! - Restoring the session persisted by a previous run
//! - Registering new members and signing members in and out
//! - Keeping the persisted copy in step with the in-memory one
//! - Publishing every change to subscribers (views, the CLI, ...)
//!
//! # Sharing
//!
//! Every operation takes `&self`, so one manager is built at startup and
//! handed around in an `Arc`. The current session lives in a
//! `tokio::sync::watch` channel: readers take cheap snapshots, and
//! subscribers are woken on each transition.

use std::sync::Arc;

use clubhouse_protocol::{
    Codec, Credentials, Endpoint, ErrorBody, JsonCodec, LoginResponse, Member, RegisterData,
};
use clubhouse_transport::{ApiResponse, Transport};
use tokio::sync::watch;

use crate::{Session, SessionError, SessionStore};

const REGISTRATION_FALLBACK: &str = "Registration failed";
const LOGIN_FALLBACK: &str = "Login failed";

/// Owns the current [`Session`] and the store it is persisted to.
///
/// ## Lifecycle
///
/// ```text
/// restore() ──→ [Anonymous] ──login()──→ [Authenticated]
///                    ↑                          │
///                    └─────────logout()─────────┘
/// ```
///
/// `register()` talks to the server but never moves between states.
pub struct SessionManager<T, S> {
    transport: Arc<T>,
    store: S,
    codec: JsonCodec,
    state: watch::Sender<Session>,
}

impl<T, S> SessionManager<T, S>
where
    T: Transport,
    S: SessionStore,
{
    /// Builds a manager whose initial session is whatever `store` holds.
    ///
    /// An unreadable store starts the manager signed out. A store holding
    /// only half of the token/member pair is cleared, so the half-state is
    /// never observable.
    pub fn restore(transport: Arc<T>, store: S) -> Self {
        let (state, _) = watch::channel(Session::Anonymous);
        let manager = Self {
            transport,
            store,
            codec: JsonCodec,
            state,
        };

        match manager.store.load() {
            Ok(stored) => match stored.into_session() {
                Some(session @ Session::Authenticated { .. }) => {
                    if let Some(member) = session.member() {
                        tracing::info!(member_id = %member.id, "session restored");
                    }
                    manager.state.send_replace(session);
                }
                Some(Session::Anonymous) => {}
                None => {
                    tracing::warn!("persisted session is incomplete, discarding it");
                    manager.logout();
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted session, starting signed out");
            }
        }

        manager
    }

    /// Signs a new member up.
    ///
    /// Registration does not sign anyone in; call [`login`](Self::login)
    /// afterwards.
    ///
    /// # Errors
    /// - [`SessionError::Registration`]: the server refused, with its
    ///   message when it gave one
    /// - [`SessionError::Network`]: the server could not be reached
    pub async fn register(&self, data: &RegisterData) -> Result<(), SessionError> {
        let body = self.codec.encode(data).map_err(SessionError::Encode)?;
        let request = Endpoint::Register.request().with_body(body);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = rejection_message(&response, REGISTRATION_FALLBACK);
            tracing::info!(
                username = %data.username,
                status = response.status,
                "registration rejected"
            );
            return Err(SessionError::Registration(message));
        }

        tracing::info!(username = %data.username, "member registered");
        Ok(())
    }

    /// Signs a member in and persists the new session.
    ///
    /// On success every subscriber sees the authenticated session, and the
    /// signed-in member is returned. On any error the session is left
    /// exactly as it was.
    ///
    /// # Errors
    /// - [`SessionError::LoginRejected`]: wrong credentials, unknown user
    /// - [`SessionError::AuthProtocol`]: a 2xx answer without a token or
    ///   member
    /// - [`SessionError::Network`]: the server could not be reached
    pub async fn login(&self, credentials: &Credentials) -> Result<Member, SessionError> {
        let body = self.codec.encode(credentials).map_err(SessionError::Encode)?;
        let request = Endpoint::Login.request().with_body(body);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = rejection_message(&response, LOGIN_FALLBACK);
            tracing::info!(
                username = %credentials.username,
                status = response.status,
                "login rejected"
            );
            return Err(SessionError::LoginRejected(message));
        }

        let (token, member) = self
            .codec
            .decode::<LoginResponse>(&response.body)
            .and_then(LoginResponse::into_parts)
            .map_err(|e| {
                tracing::warn!(error = %e, "login succeeded but the response is unusable");
                SessionError::AuthProtocol(e)
            })?;

        let session = Session::authenticated(token, member.clone());
        if let Err(e) = self.store.save(&session) {
            tracing::warn!(error = %e, "could not persist session");
        }
        self.state.send_replace(session);

        tracing::info!(member_id = %member.id, username = %member.username, "member logged in");
        Ok(member)
    }

    /// Signs out and clears the persisted session.
    ///
    /// Safe to call in any state. Subscribers are only notified when a
    /// member was actually signed in.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "could not clear persisted session");
        }

        let changed = self.state.send_if_modified(|session| {
            if session.is_authenticated() {
                *session = Session::Anonymous;
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!("member logged out");
        }
    }

    /// Subscribes to session changes.
    ///
    /// The receiver starts out holding the current session.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// A snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// The current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    /// The signed-in member, if any.
    pub fn member(&self) -> Option<Member> {
        self.state.borrow().member().cloned()
    }

    /// The transport this manager sends requests through.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// The store this manager persists to.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn rejection_message(response: &ApiResponse, fallback: &str) -> String {
    ErrorBody::message_from(&response.body).unwrap_or_else(|| fallback.to_string())
}
