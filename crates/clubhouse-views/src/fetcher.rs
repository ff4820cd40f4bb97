//! One-shot remote fetchers.
//!
//! A [`Fetcher`] sends exactly one request per call and returns what the
//! server said. No caching, no retry: views decide when to call again.

use std::sync::Arc;

use clubhouse_protocol::{
    Album, Codec, Endpoint, ErrorBody, Event, EventId, JsonCodec, MembershipResponse,
};
use clubhouse_transport::Transport;
use serde::de::DeserializeOwned;

use crate::{FetchError, MembershipError};

const MEMBERSHIP_FALLBACK: &str = "La demande a été refusée par le serveur.";

/// An entity type that the API serves as a plain JSON array.
pub trait Collection: DeserializeOwned + Clone + Send + Sync + 'static {
    /// The route that lists every item.
    const ENDPOINT: Endpoint;

    /// Short name for logs.
    const NAME: &'static str;

    /// What to tell the user when the list cannot be loaded.
    const FAILURE_MESSAGE: &'static str;
}

impl Collection for Event {
    const ENDPOINT: Endpoint = Endpoint::ListEvents;
    const NAME: &'static str = "events";
    const FAILURE_MESSAGE: &'static str =
        "Impossible de charger les événements. Veuillez réessayer plus tard.";
}

impl Collection for Album {
    const ENDPOINT: Endpoint = Endpoint::ListGallery;
    const NAME: &'static str = "gallery";
    const FAILURE_MESSAGE: &'static str =
        "Impossible de charger la galerie. Veuillez réessayer plus tard.";
}

/// Issues the club API's data requests over a shared transport.
///
/// Cheap to clone: clones share the transport.
pub struct Fetcher<T> {
    transport: Arc<T>,
    codec: JsonCodec,
}

impl<T> Clone for Fetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            codec: self.codec,
        }
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            codec: JsonCodec,
        }
    }

    /// Fetches every item of collection `C`, in server order.
    ///
    /// # Errors
    /// - [`FetchError::Status`]: any non-2xx answer
    /// - [`FetchError::Protocol`]: a body that is not a list of `C`
    /// - [`FetchError::Network`]: the server could not be reached
    pub async fn fetch_collection<C: Collection>(&self) -> Result<Vec<C>, FetchError> {
        let response = self.transport.send(C::ENDPOINT.request()).await?;
        if !response.is_success() {
            tracing::warn!(collection = C::NAME, status = response.status, "fetch failed");
            return Err(FetchError::Status(response.status));
        }

        let items: Vec<C> = self.codec.decode(&response.body).map_err(|e| {
            tracing::warn!(collection = C::NAME, error = %e, "malformed collection");
            FetchError::from(e)
        })?;
        tracing::debug!(collection = C::NAME, count = items.len(), "collection fetched");
        Ok(items)
    }

    /// Adds the signed-in member to an event's roster.
    ///
    /// `token` is the session's bearer token; `None` fails with
    /// [`MembershipError::NotAuthenticated`] without touching the network.
    pub async fn join_event(
        &self,
        token: Option<&str>,
        id: &EventId,
    ) -> Result<MembershipResponse, MembershipError> {
        self.membership(Endpoint::JoinEvent(id.clone()), token).await
    }

    /// Removes the signed-in member from an event's roster.
    pub async fn leave_event(
        &self,
        token: Option<&str>,
        id: &EventId,
    ) -> Result<MembershipResponse, MembershipError> {
        self.membership(Endpoint::LeaveEvent(id.clone()), token).await
    }

    async fn membership(
        &self,
        endpoint: Endpoint,
        token: Option<&str>,
    ) -> Result<MembershipResponse, MembershipError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(MembershipError::NotAuthenticated)?;
        let request = endpoint.request().with_bearer(token);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = ErrorBody::message_from(&response.body)
                .unwrap_or_else(|| MEMBERSHIP_FALLBACK.to_string());
            tracing::info!(path = %endpoint.path(), status = response.status, "membership change rejected");
            return Err(MembershipError::Rejected(message));
        }

        let body: MembershipResponse = self.codec.decode(&response.body).map_err(|e| {
            tracing::warn!(path = %endpoint.path(), error = %e, "malformed membership response");
            MembershipError::from(e)
        })?;
        Ok(body)
    }
}
