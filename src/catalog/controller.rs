use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::task::JoinHandle;
use url::Url;

use crate::app::{Result, TaproomError};
use crate::catalog::{ItemDetail, PageEndpoint};
use crate::channel::{Broadcast, FavoriteChannel, Subscription};
use crate::decoder::Decoder;
use crate::domain::{Item, ItemId};
use crate::fetcher::Fetcher;

/// Payload-free notification: list state changed, re-read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged;

#[derive(Debug)]
struct ListState {
    items: Vec<Item>,
    current_page: u32,
    is_loading: bool,
    has_more: bool,
}

struct Shared {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    decoder: Decoder,
    endpoint: PageEndpoint,
    max_pages: u32,
    state: Mutex<ListState>,
    changes: Broadcast<StateChanged>,
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the next page if no load is in flight and pages remain.
    ///
    /// The returned request rolls the claim back if it is dropped unsettled,
    /// even before it was ever polled.
    fn begin(self: &Arc<Self>) -> Option<PageRequest> {
        let page = {
            let mut state = self.lock_state();
            if state.is_loading || !state.has_more {
                return None;
            }
            state.current_page += 1;
            state.is_loading = true;
            state.current_page
        };
        tracing::trace!("Loading page {}", page);
        self.changes.publish(&StateChanged);

        Some(PageRequest {
            url: self.endpoint.page_url(page),
            fetcher: self.fetcher.clone(),
            decoder: self.decoder.clone(),
            in_flight: InFlight {
                owner: Arc::downgrade(self),
                page,
                settled: false,
            },
        })
    }

    fn finish(&self, page: u32, outcome: Result<Vec<Item>>) {
        {
            let mut state = self.lock_state();
            debug_assert_eq!(state.current_page, page);
            match outcome {
                Ok(items) => {
                    tracing::trace!("Page {} delivered {} items", page, items.len());
                    state.items.extend(items);
                    state.has_more = state.current_page < self.max_pages;
                }
                // The next load_next() retries the same page.
                Err(_) => state.current_page -= 1,
            }
            state.is_loading = false;
        }
        self.changes.publish(&StateChanged);
    }

    fn toggle_favorite(&self, id: ItemId) {
        let toggled = {
            let mut state = self.lock_state();
            match state.items.iter_mut().find(|item| item.id() == id) {
                Some(item) => {
                    item.toggle_favorite();
                    true
                }
                None => false,
            }
        };
        if toggled {
            self.changes.publish(&StateChanged);
        }
    }
}

/// One claimed page on its way to the network.
struct PageRequest {
    url: std::result::Result<Url, url::ParseError>,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    decoder: Decoder,
    in_flight: InFlight,
}

impl PageRequest {
    async fn run(self) {
        let PageRequest {
            url,
            fetcher,
            decoder,
            in_flight,
        } = self;
        let outcome = fetch_page(fetcher.as_ref(), &decoder, url).await;
        in_flight.settle(outcome);
    }
}

async fn fetch_page(
    fetcher: &(dyn Fetcher + Send + Sync),
    decoder: &Decoder,
    url: std::result::Result<Url, url::ParseError>,
) -> Result<Vec<Item>> {
    let url = url?;
    let body = fetcher.fetch(url.as_str()).await?;
    decoder.decode(&body)
}

/// Settles a claimed page exactly once.
///
/// Holds only a weak reference so a controller dropped mid-fetch is not kept
/// alive; its result is then discarded. If the request is dropped before
/// settling (an abandoned future or an aborted task, polled or not) the
/// claim is rolled back like a failed fetch.
struct InFlight {
    owner: Weak<Shared>,
    page: u32,
    settled: bool,
}

impl InFlight {
    fn settle(mut self, outcome: Result<Vec<Item>>) {
        self.settled = true;
        match self.owner.upgrade() {
            Some(shared) => shared.finish(self.page, outcome),
            None => tracing::trace!("Controller gone; discarding page {}", self.page),
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Some(shared) = self.owner.upgrade() {
            shared.finish(
                self.page,
                Err(TaproomError::Other("page load abandoned".into())),
            );
        }
    }
}

/// Owns the accumulated list for one browsing session and is the only thing
/// that mutates it.
///
/// Pages are requested strictly one after another: while a load is in flight
/// further `load_next` calls are no-ops. A failed page is swallowed and the
/// cursor rewound, so the next call asks for the same page again. Once
/// `max_pages` pages have arrived the list is complete for good.
///
/// Favorite toggles published on the [`FavoriteChannel`] passed at
/// construction are applied to the matching item for as long as the
/// controller lives.
pub struct PaginatedListController {
    shared: Arc<Shared>,
    favorites: FavoriteChannel,
    _favorites_subscription: Subscription,
}

impl PaginatedListController {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        decoder: Decoder,
        endpoint: PageEndpoint,
        max_pages: u32,
        favorites: FavoriteChannel,
    ) -> Self {
        let shared = Arc::new(Shared {
            fetcher,
            decoder,
            endpoint,
            max_pages,
            state: Mutex::new(ListState {
                items: Vec::new(),
                current_page: 0,
                is_loading: false,
                has_more: max_pages > 0,
            }),
            changes: Broadcast::new(),
        });

        let owner = Arc::downgrade(&shared);
        let subscription = favorites.subscribe(move |id| {
            if let Some(shared) = owner.upgrade() {
                shared.toggle_favorite(id);
            }
        });

        Self {
            shared,
            favorites,
            _favorites_subscription: subscription,
        }
    }

    /// Fetch, decode and append the next page, if one may be requested now.
    pub async fn load_next(&self) {
        if let Some(request) = self.shared.begin() {
            request.run().await;
        }
    }

    /// Like [`load_next`](Self::load_next) but runs the fetch on the tokio
    /// runtime. `is_loading` is already set when this returns. Returns
    /// `None` when the call was a no-op.
    pub fn spawn_load_next(&self) -> Option<JoinHandle<()>> {
        let request = self.shared.begin()?;
        Some(tokio::spawn(request.run()))
    }

    /// Flip the favorite flag of the item with `id`. Unknown ids are ignored.
    pub fn set_favorite(&self, id: ItemId) {
        self.shared.toggle_favorite(id);
    }

    /// Register a handler invoked after every state change.
    pub fn on_change<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.shared
            .changes
            .subscribe(move |_: &StateChanged| handler())
    }

    /// Detail view model for `id`, holding its own copy of the item.
    pub fn detail(&self, id: ItemId) -> Option<ItemDetail> {
        self.item(id)
            .map(|item| ItemDetail::new(item, self.favorites.clone()))
    }

    pub fn items(&self) -> Vec<Item> {
        self.shared.lock_state().items.clone()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.shared
            .lock_state()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.lock_state().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.shared.lock_state().is_loading
    }

    pub fn has_more(&self) -> bool {
        self.shared.lock_state().has_more
    }

    pub fn current_page(&self) -> u32 {
        self.shared.lock_state().current_page
    }

    pub fn max_pages(&self) -> u32 {
        self.shared.max_pages
    }
}
