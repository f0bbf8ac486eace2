use crate::domain::events::OverrideChange;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

pub trait LocationListener: Debug + Send + Sync {
    fn location_override_changed(&self, change: &OverrideChange);
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub struct LocationListeners {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(ListenerId, Arc<dyn LocationListener>)>>,
}

impl LocationListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn LocationListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        debug!("📣 Registering listener {:?}: {:?}", id, listener);

        let mut listeners = self.listeners.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        listeners.push((id, listener));
        id
    }

    /// Returns `false` if no listener was registered under `id`.
    pub fn unregister(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let count = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);

        let removed = listeners.len() != count;
        debug!("📣 Unregistering listener {:?}... {}", id, if removed { "OK" } else { "not registered" });
        removed
    }

    pub fn len(&self) -> usize {
        self.listeners.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn publish(&self, change: &OverrideChange) {
        // Listeners may register or unregister while being notified, so don't hold the lock
        let listeners: Vec<Arc<dyn LocationListener>> = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        trace!("📣 Notifying {} listener(s) of {:?}", listeners.len(), change);
        for listener in listeners {
            listener.location_override_changed(change);
        }
    }
}

/// Forwards every change into a channel so it can be consumed off the caller's thread.
///
/// The channel is unbounded: publishing never blocks the writer and no change is dropped.
#[derive(Debug)]
pub struct ChannelListener {
    tx: UnboundedSender<OverrideChange>,
}

impl ChannelListener {
    pub fn new(tx: UnboundedSender<OverrideChange>) -> Self {
        ChannelListener { tx }
    }
}

impl LocationListener for ChannelListener {
    fn location_override_changed(&self, change: &OverrideChange) {
        if self.tx.send(change.clone()).is_err() {
            debug!("📣 Listener channel is closed");
        }
    }
}
