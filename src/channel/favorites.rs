use std::sync::OnceLock;

use crate::channel::{Broadcast, Subscription};
use crate::domain::ItemId;

/// A favorite flag was flipped on the item with this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggled {
    pub id: ItemId,
}

/// Carries favorite toggles from detail views to list controllers without
/// either side holding a reference to the other.
#[derive(Clone, Default)]
pub struct FavoriteChannel {
    inner: Broadcast<FavoriteToggled>,
}

impl FavoriteChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide channel.
    pub fn global() -> &'static FavoriteChannel {
        static GLOBAL: OnceLock<FavoriteChannel> = OnceLock::new();
        GLOBAL.get_or_init(FavoriteChannel::new)
    }

    pub fn publish(&self, id: ItemId) {
        tracing::debug!("Favorite toggled for item {}", id);
        self.inner.publish(&FavoriteToggled { id });
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(ItemId) + Send + Sync + 'static,
    {
        self.inner.subscribe(move |event: &FavoriteToggled| handler(event.id))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}
