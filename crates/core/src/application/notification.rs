// Notification Tracker - per-job notified flag

use crate::domain::StoreKey;
use crate::error::Result;
use crate::port::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const FLAG_SET: &str = "1";
const FLAG_CLEAR: &str = "0";

/// Notification Tracker
///
/// Two states per job identifier: not_notified (including when no entry was
/// ever written) and notified. Transitions happen only through explicit
/// `set_notified` calls, in either direction. Independent of the mapping
/// lifecycle: flags are not namespaced and carry no reverse index.
pub struct NotificationTracker {
    store: Arc<dyn KeyValueStore>,
    ttl: Option<Duration>,
}

impl NotificationTracker {
    /// Tracker with persistent flags (no expiry)
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, ttl: None }
    }

    /// Tracker whose flags expire after `ttl`; absent flags still read
    /// as false, so eviction degrades to the initial state
    pub fn with_ttl(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl: Some(ttl),
        }
    }

    /// Unconditionally overwrite the stored flag for `job_id`
    pub async fn set_notified(&self, job_id: &str, notified: bool) -> Result<()> {
        let value = if notified { FLAG_SET } else { FLAG_CLEAR };
        self.store
            .set(&StoreKey::notified(job_id), value, self.ttl)
            .await?;
        debug!(notified, "stored notification flag");
        Ok(())
    }

    /// Read the stored flag; false when no entry exists (absence is not
    /// an error)
    pub async fn is_notified(&self, job_id: &str) -> Result<bool> {
        let value = self.store.get(&StoreKey::notified(job_id)).await?;
        Ok(matches!(value.as_deref(), Some(FLAG_SET)))
    }
}
