// Key-Value Store Port (Interface)

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Interface for the external key-value store with per-key expiry.
///
/// The store is shared and external; every call is one request/response
/// round trip. `ttl = None` means no automatic expiry and must never be
/// used for mapping entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a key; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Unconditional write with optional expiry
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// True when the key exists and has not expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Conditional write: stores the value only when the key is absent.
    /// Returns true when this call claimed the key. Atomic on the store
    /// side, so concurrent callers observe exactly one winner.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<bool>;
}
