use crate::session::subscription::{Subscriber, Subscribers};
use crate::{KeyValueStore, Session, Subscription};

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::debug;

/// Single source of truth for the current [`Session`].
///
/// Publishing replaces the session wholesale and notifies every subscriber
/// synchronously, in write order, before returning. Callbacks may read
/// [`snapshot`](Self::snapshot) but must not publish, subscribe or drop a
/// [`Subscription`] of the same store.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Session>>,
    subscribers: Arc<Mutex<Subscribers<Session>>>,
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Creates the store from the persisted entries.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = Session::read_from(store.as_ref());
        Self {
            current: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(Mutex::new(Subscribers::default())),
            store,
        }
    }

    /// Latest published session.
    pub fn snapshot(&self) -> Session {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Calls `callback` with the current session right away, then with
    /// every published session until the returned subscription is dropped.
    pub fn subscribe<F>(&self, mut callback: F) -> Subscription
    where
        F: FnMut(&Session) + Send + 'static,
    {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        callback(&self.snapshot());

        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.list.push(Subscriber {
            id,
            callback: Box::new(callback),
        });

        debug!(
            "Session subscriber {id} registered ({} total)",
            subscribers.list.len()
        );

        Subscription::new(id, Arc::downgrade(&self.subscribers))
    }

    /// Like [`subscribe`](Self::subscribe) but only reports whether a user
    /// is signed in, and only when that truth value changes.
    pub fn subscribe_authenticated<F>(&self, mut callback: F) -> Subscription
    where
        F: FnMut(bool) + Send + 'static,
    {
        let mut last: Option<bool> = None;
        self.subscribe(move |session| {
            let authenticated = session.is_authenticated();
            if last != Some(authenticated) {
                last = Some(authenticated);
                callback(authenticated);
            }
        })
    }

    /// Re-reads the persisted entries and publishes them.
    pub fn resync_from_store(&self) {
        let session = Session::read_from(self.store.as_ref());
        self.publish(session);
    }

    /// Publishes an anonymous session. Persistent entries are left alone.
    pub fn clear(&self) {
        self.publish(Session::anonymous());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .list
            .len()
    }

    fn publish(&self, session: Session) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session.clone();

        for subscriber in subscribers.list.iter_mut() {
            (subscriber.callback)(&session);
        }
    }
}
