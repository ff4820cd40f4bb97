//! The gallery page: read-only albums, optionally filtered by activity.

use std::sync::Arc;

use clubhouse_protocol::{Activity, Album};
use clubhouse_transport::Transport;
use tokio::sync::watch;

use crate::{CollectionView, ViewState};

/// Albums matching `activity`, in their original order. `None` keeps all.
pub fn filter_by_activity(albums: &[Album], activity: Option<Activity>) -> Vec<Album> {
    albums
        .iter()
        .filter(|album| activity.is_none_or(|a| album.activity == a))
        .cloned()
        .collect()
}

/// Gallery album list.
pub struct GalleryView<T> {
    view: CollectionView<Album, T>,
}

impl<T: Transport> GalleryView<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            view: CollectionView::new(transport),
        }
    }

    pub fn mount(&self) {
        self.view.mount();
    }

    pub fn unmount(&self) {
        self.view.unmount();
    }

    pub fn state(&self) -> ViewState<Album> {
        self.view.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Album>> {
        self.view.subscribe()
    }

    pub async fn settled(&self) -> ViewState<Album> {
        self.view.settled().await
    }

    pub fn albums(&self) -> Vec<Album> {
        self.view.state().items().to_vec()
    }

    /// Loaded albums of one activity.
    pub fn by_activity(&self, activity: Activity) -> Vec<Album> {
        filter_by_activity(self.view.state().items(), Some(activity))
    }
}
