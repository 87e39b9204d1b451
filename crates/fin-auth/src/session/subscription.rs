use std::sync::{Mutex, PoisonError, Weak};

pub(crate) type Callback<T> = Box<dyn FnMut(&T) + Send>;

pub(crate) struct Subscriber<T> {
    pub(crate) id: u64,
    pub(crate) callback: Callback<T>,
}

pub(crate) struct Subscribers<T> {
    pub(crate) list: Vec<Subscriber<T>>,
    pub(crate) next_id: u64,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            next_id: 0,
        }
    }
}

/// Live registration on a [`SessionStore`](crate::SessionStore).
///
/// Dropping it stops further notifications.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Subscribers<crate::Session>>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, subscribers: Weak<Mutex<Subscribers<crate::Session>>>) -> Self {
        Self { id, subscribers }
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            let mut subscribers = subscribers.lock().unwrap_or_else(PoisonError::into_inner);
            subscribers.list.retain(|s| s.id != self.id);
        }
    }
}
