// ABOUTME: Watch registry dispatching realtime change events to the
// ABOUTME: typed keys they invalidate

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use homees_client::RealtimeBridge;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::invalidation::{keys_for_event, InvalidationKey};
use crate::session::Session;

struct WatchEntry {
    key: InvalidationKey,
    tx: mpsc::UnboundedSender<InvalidationKey>,
}

type Registry = Arc<Mutex<HashMap<u64, WatchEntry>>>;

fn lock_registry(registry: &Registry) -> std::sync::MutexGuard<'_, HashMap<u64, WatchEntry>> {
    registry
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Owns the bridge subscription and fans invalidations out to watch
/// handles. One store per signed-in session.
pub struct AppStore {
    session: Session,
    registry: Registry,
    next_id: AtomicU64,
    dispatcher: JoinHandle<()>,
}

impl AppStore {
    /// Subscribes to the bridge and starts the dispatch task. The task
    /// ends when the bridge closes or the store is dropped.
    pub fn new(session: Session, bridge: &RealtimeBridge) -> Self {
        let registry: Registry = Arc::new(Mutex::new(HashMap::new()));
        let mut subscription = bridge.subscribe();

        let dispatch_registry = Arc::clone(&registry);
        let dispatcher = tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                let keys = keys_for_event(&event);
                if keys.is_empty() {
                    continue;
                }
                debug!("Change on {} invalidates {} key(s)", event.table, keys.len());
                let watchers = lock_registry(&dispatch_registry);
                for entry in watchers.values() {
                    if keys.contains(&entry.key) {
                        // A send failure means the handle is mid-drop;
                        // its registry entry goes with it.
                        let _ = entry.tx.send(entry.key.clone());
                    }
                }
            }
        });

        Self {
            session,
            registry,
            next_id: AtomicU64::new(1),
            dispatcher,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Registers interest in one key. The handle yields the key each
    /// time a matching change event lands; dropping it detaches the
    /// watcher.
    pub fn watch(&self, key: InvalidationKey) -> WatchHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock_registry(&self.registry).insert(id, WatchEntry { key, tx });
        WatchHandle {
            id,
            registry: Arc::clone(&self.registry),
            rx,
        }
    }

    /// Number of live watchers, for teardown checks.
    pub fn watcher_count(&self) -> usize {
        lock_registry(&self.registry).len()
    }
}

impl Drop for AppStore {
    fn drop(&mut self) {
        self.dispatcher.abort();
        // Dropping the entries drops their senders, so pending
        // `invalidated` calls resolve to `None`.
        lock_registry(&self.registry).clear();
    }
}

/// A registered watcher. Await [`WatchHandle::invalidated`] to learn
/// that the watched view must be re-fetched wholesale.
pub struct WatchHandle {
    id: u64,
    registry: Registry,
    rx: mpsc::UnboundedReceiver<InvalidationKey>,
}

impl WatchHandle {
    /// Waits for the next invalidation. `None` once the store is gone.
    pub async fn invalidated(&mut self) -> Option<InvalidationKey> {
        self.rx.recv().await
    }

    /// Non-blocking check for a pending invalidation.
    pub fn try_invalidated(&mut self) -> Option<InvalidationKey> {
        self.rx.try_recv().ok()
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        lock_registry(&self.registry).remove(&self.id);
    }
}
