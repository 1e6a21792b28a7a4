//! Realtime change events
//!
//! The websocket transport that delivers change notifications is owned by a
//! collaborator; it integrates by pushing decoded events into a
//! [`RealtimeBridge`]. Consumers subscribe and treat every event as an
//! invalidation signal: local copies are re-fetched wholesale, never
//! patched incrementally.

use homees_config as config;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::warn;

/// Default buffer size for the broadcast channel
const DEFAULT_BUFFER: usize = 256;

/// Kind of row change, as reported by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One row change on a remote table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub kind: ChangeKind,
    /// The new row (or old row for deletes), as received
    pub row: serde_json::Value,
}

impl ChangeEvent {
    pub fn new(table: impl Into<String>, kind: ChangeKind, row: serde_json::Value) -> Self {
        Self {
            table: table.into(),
            kind,
            row,
        }
    }

    /// String field of the affected row, if present
    pub fn champ(&self, name: &str) -> Option<&str> {
        self.row.get(name).and_then(|v| v.as_str())
    }

    /// `id` field of the affected row, if present
    pub fn row_id(&self) -> Option<&str> {
        self.champ("id")
    }
}

/// Fan-out point between the realtime transport and the application
#[derive(Clone)]
pub struct RealtimeBridge {
    tx: broadcast::Sender<ChangeEvent>,
}

impl RealtimeBridge {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Buffer size from `HOMEES_REALTIME_BUFFER`, defaulting to 256
    pub fn from_env() -> Self {
        Self::new(config::env_u64_or(config::HOMEES_REALTIME_BUFFER, DEFAULT_BUFFER as u64) as usize)
    }

    /// Publish one event to every live subscription
    ///
    /// Returns the number of subscriptions that received it; an event with
    /// no listener is dropped silently.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Open a subscription; dropping it detaches it from the bridge
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for RealtimeBridge {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER)
    }
}

/// One listener on the bridge
pub struct Subscription {
    rx: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Wait for the next event; `None` once the bridge is gone
    ///
    /// A slow subscriber that misses events logs the gap and keeps going;
    /// consumers re-fetch wholesale anyway, so a lost event at worst delays
    /// one refresh until the next change.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("Realtime subscription lagged, {} events dropped", missed);
                    continue;
                }
            }
        }
    }
}
