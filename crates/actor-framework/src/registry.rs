//! # Observer Registry
//!
//! Fan-out of actor events to every connected observer.
//!
//! Each observer owns a bounded channel. The first message it ever receives is the
//! snapshot handed to [`ObserverRegistry::subscribe`]; every later message is an
//! event passed to [`ObserverRegistry::publish`]. Because both go through the same
//! channel, an observer can never see an incremental event before its snapshot.
//!
//! Publishing never waits. An observer whose buffer is full would miss the event and
//! drift from the store, so it is disconnected instead: its event stream ends, and it
//! resynchronises by subscribing again and receiving a fresh snapshot. Closed
//! observers are dropped the same way. Neither affects delivery to the others.

use std::collections::BTreeMap;
use std::fmt::Debug;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// Identifier handed to an observer on subscription.
pub type ObserverId = u64;

/// The receiving half given to a newly connected observer.
#[derive(Debug)]
pub struct Subscription<E> {
    pub id: ObserverId,
    pub events: mpsc::Receiver<E>,
}

/// Registry of connected observer handles.
#[derive(Debug)]
pub struct ObserverRegistry<E> {
    observers: BTreeMap<ObserverId, mpsc::Sender<E>>,
    next_id: ObserverId,
    buffer_size: usize,
}

impl<E: Clone + Debug> ObserverRegistry<E> {
    /// `buffer_size` is the number of undelivered events an observer may lag
    /// behind before it is disconnected.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            observers: BTreeMap::new(),
            next_id: 1,
            buffer_size: buffer_size.max(1),
        }
    }

    /// Registers a new observer whose first message is `snapshot`.
    pub fn subscribe(&mut self, snapshot: E) -> Subscription<E> {
        let (sender, events) = mpsc::channel(self.buffer_size);
        // A fresh channel always has room for one message.
        let _ = sender.try_send(snapshot);

        let id = self.next_id;
        self.next_id += 1;
        self.observers.insert(id, sender);
        debug!(observer = id, observers = self.observers.len(), "Subscribed");
        Subscription { id, events }
    }

    /// Removes an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let removed = self.observers.remove(&id).is_some();
        debug!(observer = id, removed, observers = self.observers.len(), "Unsubscribed");
        removed
    }

    /// Delivers `event` to every connected observer and returns how many accepted it.
    ///
    /// Observers that could not take the event are removed.
    pub fn publish(&mut self, event: &E) -> usize {
        let mut delivered = 0;
        self.observers
            .retain(|id, sender| match sender.try_send(event.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(TrySendError::Full(_)) => {
                    warn!(observer = *id, "Observer lagging, disconnected");
                    false
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(observer = *id, "Observer gone, pruned");
                    false
                }
            });
        delivered
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
