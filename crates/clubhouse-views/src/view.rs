//! Generic collection view: a mounted fetch whose outcome is published on
//! a watch channel.
//!
//! ```text
//!          mount()                 fetch ok
//! (new) ──────────→ Loading ────────────────→ Ready(items)
//!                      │
//!                      └─────────────────────→ Failed { message, detail }
//!                           fetch error
//! ```
//!
//! The fetch runs as its own Tokio task wrapped in an `Abortable`.
//! `unmount()` (or dropping the view) aborts it; a result that arrives
//! after unmounting is discarded, never published.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clubhouse_transport::Transport;
use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::watch;

use crate::{Collection, Fetcher};

/// What a collection view currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<C> {
    /// A fetch is in flight (or was never started).
    Loading,
    /// The fetch succeeded.
    Ready(Vec<C>),
    /// The fetch failed. `message` is for the user, `detail` is the
    /// technical reason.
    Failed { message: String, detail: String },
}

impl<C> ViewState<C> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded items. Empty unless `Ready`.
    pub fn items(&self) -> &[C] {
        match self {
            Self::Ready(items) => items,
            Self::Loading | Self::Failed { .. } => &[],
        }
    }
}

/// Bookkeeping for the one fetch a view may have in flight.
///
/// `ticket` changes on every mount and unmount; a task may only publish
/// while the ticket it was started with is still current.
#[derive(Default)]
struct Inflight {
    ticket: u64,
    abort: Option<AbortHandle>,
}

struct Shared<C> {
    state: watch::Sender<ViewState<C>>,
    inflight: Mutex<Inflight>,
}

impl<C> Shared<C> {
    // A panic while holding this lock cannot leave `Inflight` half-written.
    fn inflight(&self) -> MutexGuard<'_, Inflight> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A mounted, self-updating list of `C` fetched from the club API.
pub struct CollectionView<C, T> {
    fetcher: Fetcher<T>,
    shared: Arc<Shared<C>>,
}

impl<C: Collection, T: Transport> CollectionView<C, T> {
    /// Creates an unmounted view in the `Loading` state.
    pub fn new(transport: Arc<T>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            fetcher: Fetcher::new(transport),
            shared: Arc::new(Shared {
                state,
                inflight: Mutex::default(),
            }),
        }
    }

    /// Starts the one-shot fetch. Must be called inside a Tokio runtime.
    ///
    /// Mounting again restarts from `Loading` and cancels any fetch still
    /// in flight.
    pub fn mount(&self) {
        let (abort, registration) = AbortHandle::new_pair();
        let ticket = {
            let mut inflight = self.shared.inflight();
            if let Some(previous) = inflight.abort.take() {
                previous.abort();
            }
            inflight.ticket += 1;
            inflight.abort = Some(abort);
            inflight.ticket
        };
        self.shared.state.send_replace(ViewState::Loading);

        let fetcher = self.fetcher.clone();
        let shared = Arc::clone(&self.shared);
        let task = async move {
            let next = match fetcher.fetch_collection::<C>().await {
                Ok(items) => ViewState::Ready(items),
                Err(e) => {
                    tracing::warn!(collection = C::NAME, error = %e, "could not load collection");
                    ViewState::Failed {
                        message: C::FAILURE_MESSAGE.to_string(),
                        detail: e.to_string(),
                    }
                }
            };

            let mut inflight = shared.inflight();
            if inflight.ticket != ticket {
                tracing::debug!(collection = C::NAME, "discarding result of stale fetch");
                return;
            }
            inflight.abort = None;
            shared.state.send_replace(next);
        };

        tokio::spawn(Abortable::new(task, registration));
        tracing::debug!(collection = C::NAME, ticket, "view mounted");
    }

    /// Cancels the in-flight fetch, if any. The state is left as is.
    pub fn unmount(&self) {
        let mut inflight = self.shared.inflight();
        inflight.ticket += 1;
        if let Some(abort) = inflight.abort.take() {
            abort.abort();
            tracing::debug!(collection = C::NAME, "pending fetch cancelled");
        }
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.shared.inflight().abort.is_some()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState<C> {
        self.shared.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<C>> {
        self.shared.state.subscribe()
    }

    /// Waits until the view leaves `Loading` and returns that state.
    ///
    /// Never resolves if the view is unmounted while still loading.
    pub async fn settled(&self) -> ViewState<C> {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives as long as `self`.
            Err(_) => ViewState::Loading,
        }
    }

    /// Rewrites the loaded items in place. Does nothing unless `Ready`.
    ///
    /// Subscribers are notified only if `f` returns `true`.
    pub(crate) fn update_items(&self, f: impl FnOnce(&mut Vec<C>) -> bool) -> bool {
        self.shared.state.send_if_modified(|state| match state {
            ViewState::Ready(items) => f(items),
            ViewState::Loading | ViewState::Failed { .. } => false,
        })
    }

    pub(crate) fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }
}

impl<C, T> Drop for CollectionView<C, T> {
    fn drop(&mut self) {
        let mut inflight = self.shared.inflight();
        inflight.ticket += 1;
        if let Some(abort) = inflight.abort.take() {
            abort.abort();
        }
    }
}
