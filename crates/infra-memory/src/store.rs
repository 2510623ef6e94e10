// In-Memory KeyValueStore Implementation
//
// Mutex-guarded map with per-entry absolute expiry. Expiry is driven by an
// injected TimeProvider, so tests can advance the clock deterministically
// instead of sleeping. Expired entries are evicted lazily on access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuidmap_core::error::Result;
use uuidmap_core::port::{KeyValueStore, SystemTimeProvider, TimeProvider};

struct Entry {
    value: String,
    /// Epoch ms after which the entry reads as absent; None = no expiry
    expires_at: Option<i64>,
}

impl Entry {
    fn is_live(&self, now: i64) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

pub struct MemoryKvStore {
    time_provider: Arc<dyn TimeProvider>,
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryKvStore {
    /// Store on the system clock
    pub fn new() -> Self {
        Self::with_time_provider(Arc::new(SystemTimeProvider))
    }

    /// Store on an injected clock (deterministic expiry in tests)
    pub fn with_time_provider(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            time_provider,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn expires_at(&self, ttl: Option<Duration>) -> Option<i64> {
        ttl.map(|ttl| self.time_provider.now_millis() + ttl.as_millis() as i64)
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = self.time_provider.now_millis();
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: self.expires_at(ttl),
        };
        self.entries.lock().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<bool> {
        let now = self.time_provider.now_millis();
        let mut entries = self.entries.lock().await;

        // Liveness check and insert under one lock acquisition: this is the
        // adapter's atomic get-or-create
        if let Some(entry) = entries.get(key) {
            if entry.is_live(now) {
                return Ok(false);
            }
        }
        let entry = Entry {
            value: value.to_string(),
            expires_at: self.expires_at(ttl),
        };
        entries.insert(key.to_string(), entry);
        Ok(true)
    }
}
