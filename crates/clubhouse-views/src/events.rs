//! The events page: the event list, its membership buttons, and the
//! join/leave actions behind them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clubhouse_protocol::{Event, EventId, EventPatch};
use clubhouse_session::Session;
use clubhouse_transport::Transport;
use tokio::sync::watch;

use crate::{
    ButtonAction, CollectionView, MembershipAction, MembershipButton, Notice, ViewState, schedule,
};

/// What pressing an event's membership button led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonOutcome {
    /// A join or leave was attempted; here is how it went.
    Notice(Notice),
    /// The visitor is anonymous and should be sent to sign up.
    SignUpRequired,
    /// The button was disabled or the event is unknown.
    Ignored,
}

/// Event list bound to the current session.
///
/// The view reads the session through a watch receiver, typically
/// obtained from `SessionManager::subscribe()`, so buttons always reflect
/// whoever is signed in right now.
pub struct EventsView<T> {
    view: CollectionView<Event, T>,
    session: watch::Receiver<Session>,
}

impl<T: Transport> EventsView<T> {
    pub fn new(transport: Arc<T>, session: watch::Receiver<Session>) -> Self {
        Self {
            view: CollectionView::new(transport),
            session,
        }
    }

    /// Starts loading the events. See [`CollectionView::mount`].
    pub fn mount(&self) {
        self.view.mount();
    }

    /// Cancels a pending load. See [`CollectionView::unmount`].
    pub fn unmount(&self) {
        self.view.unmount();
    }

    pub fn state(&self) -> ViewState<Event> {
        self.view.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Event>> {
        self.view.subscribe()
    }

    /// Waits for the load to finish. See [`CollectionView::settled`].
    pub async fn settled(&self) -> ViewState<Event> {
        self.view.settled().await
    }

    /// The loaded events, in server order.
    pub fn events(&self) -> Vec<Event> {
        self.view.state().items().to_vec()
    }

    /// Looks an event up by id.
    pub fn event(&self, id: &EventId) -> Option<Event> {
        self.view
            .state()
            .items()
            .iter()
            .find(|event| &event.id == id)
            .cloned()
    }

    /// Events that have not started yet, plus ongoing ones.
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<Event> {
        schedule::partition(self.view.state().items(), now).0
    }

    /// Events whose date is before `now`.
    pub fn past(&self, now: DateTime<Utc>) -> Vec<Event> {
        schedule::partition(self.view.state().items(), now).1
    }

    /// The session as the view currently sees it.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// The membership button for `event` under the current session.
    pub fn button_for(&self, event: &Event) -> MembershipButton {
        MembershipButton::for_event(&self.session.borrow(), event)
    }

    /// Presses the membership button of event `id`.
    pub async fn press(&self, id: &EventId) -> ButtonOutcome {
        let Some(event) = self.event(id) else {
            return ButtonOutcome::Ignored;
        };
        match self.button_for(&event).action {
            ButtonAction::Join => ButtonOutcome::Notice(self.join(id).await),
            ButtonAction::Leave => ButtonOutcome::Notice(self.leave(id).await),
            ButtonAction::SignUp => ButtonOutcome::SignUpRequired,
            ButtonAction::None => ButtonOutcome::Ignored,
        }
    }

    /// Joins event `id` and merges the server's answer into the list.
    pub async fn join(&self, id: &EventId) -> Notice {
        self.change_membership(MembershipAction::Join, id).await
    }

    /// Leaves event `id` and merges the server's answer into the list.
    pub async fn leave(&self, id: &EventId) -> Notice {
        self.change_membership(MembershipAction::Leave, id).await
    }

    async fn change_membership(&self, action: MembershipAction, id: &EventId) -> Notice {
        let token = self.session.borrow().token().map(str::to_string);
        let fetcher = self.view.fetcher();
        let result = match action {
            MembershipAction::Join => fetcher.join_event(token.as_deref(), id).await,
            MembershipAction::Leave => fetcher.leave_event(token.as_deref(), id).await,
        };

        match result {
            Ok(response) => {
                self.merge(id, response.event);
                tracing::info!(event_id = %id, ?action, "membership changed");
                Notice::success(action, response.message)
            }
            Err(e) => {
                tracing::warn!(event_id = %id, ?action, error = %e, "membership change failed");
                Notice::failure(action, &e)
            }
        }
    }

    /// Overwrites the fields of event `id` that `patch` carries.
    ///
    /// Answers are merged in the order they arrive, so with two concurrent
    /// calls on the same event the later response wins. Returns `false`
    /// if no loaded event has that id.
    pub fn merge(&self, id: &EventId, patch: EventPatch) -> bool {
        self.view.update_items(|events| {
            match events.iter_mut().find(|event| &event.id == id) {
                Some(event) => {
                    event.apply(patch);
                    true
                }
                None => false,
            }
        })
    }
}
