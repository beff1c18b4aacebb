//! In-process, synchronous publish/subscribe.
//!
//! [`Broadcast`] delivers each published message to every registered handler
//! on the publishing thread, in subscription order. Handlers are never called
//! with an internal lock held, so a handler may publish, subscribe or drop
//! subscriptions on the same broadcast.

mod favorites;

pub use favorites::{FavoriteChannel, FavoriteToggled};

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

impl<T> Registry<T> {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(h, _)| *h == id)
    }
}

fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    // Handlers run outside the lock, so poisoning can only come from a
    // panic inside our own bookkeeping; the registry is still consistent.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

trait Deregister: Send + Sync {
    fn deregister(&self, id: u64);
}

impl<T: 'static> Deregister for Mutex<Registry<T>> {
    fn deregister(&self, id: u64) {
        lock(self).handlers.retain(|(h, _)| *h != id);
    }
}

/// A typed broadcast of `T` messages.
pub struct Broadcast<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register `handler`. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));

        let weak: Weak<dyn Deregister> = Arc::downgrade(&self.registry) as Weak<dyn Deregister>;
        Subscription {
            registry: Some(weak),
            id,
        }
    }

    /// Deliver `message` to every current subscriber.
    ///
    /// A handler that panics is logged and skipped; the remaining handlers
    /// still receive the message. A handler deregistered by an earlier
    /// handler during this call is not invoked.
    pub fn publish(&self, message: &T) {
        let snapshot: Vec<(u64, Handler<T>)> = lock(&self.registry).handlers.clone();

        for (id, handler) in snapshot {
            if !lock(&self.registry).contains(id) {
                continue;
            }
            if panic::catch_unwind(AssertUnwindSafe(|| handler(message))).is_err() {
                tracing::warn!("Subscriber {} panicked while handling a message", id);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

impl<T: 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// Deregistration handle returned by [`Broadcast::subscribe`].
///
/// Dropping the handle removes the handler. Outliving the broadcast is fine.
#[must_use = "dropping a Subscription immediately unsubscribes the handler"]
pub struct Subscription {
    registry: Option<Weak<dyn Deregister>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            registry.deregister(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
