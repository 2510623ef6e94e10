// Mapping Service - Token <-> job identifier indirection

use crate::domain::token::kind_or_default;
use crate::domain::{JobId, StoreKey, Token};
use crate::error::{AppError, Result};
use crate::port::{KeyValueStore, TokenProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default lifetime for mapping entries when the request does not carry one
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Attempts to claim the reverse key before giving up. A retry only happens
/// when the winning entry expires between our failed claim and the read-back,
/// so one iteration is the overwhelmingly common case.
const CLAIM_ATTEMPTS: u32 = 3;

/// Create request for a token mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub job_id: String,

    /// Preset token; when supplied it is stored as-is and returned unchanged
    #[serde(default)]
    pub token: Option<String>,

    /// Reversible mode: repeated calls for the same (kind, job_id) return
    /// the same token while the entry is live
    #[serde(default)]
    pub unique: bool,

    /// Namespace tag; defaults to the fixed default namespace
    #[serde(default)]
    pub kind: Option<String>,

    /// Entry lifetime; defaults to the service-wide default
    #[serde(default)]
    pub ttl: Option<Duration>,
}

impl CreateRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            token: None,
            unique: false,
            kind: None,
            ttl: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Mapping Service
///
/// Owns creation, resolution, and namespacing of token -> job identifier
/// associations. Holds no in-process state; every operation is one round
/// trip to the injected store.
pub struct MappingService {
    store: Arc<dyn KeyValueStore>,
    tokens: Arc<dyn TokenProvider>,
    default_ttl: Duration,
}

impl MappingService {
    pub fn new(store: Arc<dyn KeyValueStore>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_default_ttl(store, tokens, DEFAULT_TTL)
    }

    pub fn with_default_ttl(
        store: Arc<dyn KeyValueStore>,
        tokens: Arc<dyn TokenProvider>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            store,
            tokens,
            default_ttl,
        }
    }

    /// Create a token mapping for `job_id` and return the token.
    ///
    /// Preset mode (token supplied) overwrites any prior forward entry at
    /// that key and never touches the reverse index. Reversible mode
    /// (`unique`) is idempotent per (kind, job_id) for the life of the
    /// entry. Default mode mints a fresh token on every call.
    ///
    /// Mapping entries are always written with a finite expiry.
    pub async fn create(&self, req: CreateRequest) -> Result<Token> {
        let kind = kind_or_default(req.kind.as_deref()).to_string();
        let ttl = req.ttl.unwrap_or(self.default_ttl);

        if let Some(token) = req.token {
            self.store
                .set(&StoreKey::forward(&kind, &token), &req.job_id, Some(ttl))
                .await?;
            debug!(%kind, mode = "preset", "stored token mapping");
            return Ok(token);
        }

        if req.unique {
            return self.create_unique(&kind, &req.job_id, ttl).await;
        }

        let token = self.tokens.generate_token();
        self.store
            .set(&StoreKey::forward(&kind, &token), &req.job_id, Some(ttl))
            .await?;
        debug!(%kind, mode = "default", "stored token mapping");
        Ok(token)
    }

    /// Reversible-mode creation: a single atomic get-or-create against the
    /// reverse key, so concurrent calls for the same (kind, job_id)
    /// converge on one token.
    async fn create_unique(&self, kind: &str, job_id: &str, ttl: Duration) -> Result<Token> {
        let reverse_key = StoreKey::reverse(kind, job_id);

        // Live entry: return the stored token without refreshing its expiry
        if let Some(existing) = self.store.get(&reverse_key).await? {
            debug!(%kind, mode = "unique", "reusing live token mapping");
            return Ok(existing);
        }

        for attempt in 0..CLAIM_ATTEMPTS {
            let token = self.tokens.generate_token();
            if self
                .store
                .set_if_absent(&reverse_key, &token, Some(ttl))
                .await?
            {
                self.store
                    .set(&StoreKey::forward(kind, &token), job_id, Some(ttl))
                    .await?;
                debug!(%kind, mode = "unique", "stored token mapping");
                return Ok(token);
            }

            // Lost the claim: a concurrent create won, return its token
            if let Some(existing) = self.store.get(&reverse_key).await? {
                warn!(%kind, attempt, "lost reverse-key claim, returning winner's token");
                return Ok(existing);
            }

            // Winner's entry expired between the failed claim and the read
            warn!(%kind, attempt, "claimed reverse key vanished, retrying");
        }

        Err(AppError::Internal(format!(
            "could not claim reverse entry for kind '{kind}' after {CLAIM_ATTEMPTS} attempts"
        )))
    }

    /// Resolve a token back to its job identifier.
    ///
    /// Fails with `AppError::NotFound` when the forward entry is absent,
    /// expired, or stored under a different kind. Wrong-kind lookups are
    /// structurally identical to missing keys.
    pub async fn resolve(&self, token: &str, kind: Option<&str>) -> Result<JobId> {
        let kind = kind_or_default(kind);
        match self.store.get(&StoreKey::forward(kind, token)).await? {
            Some(job_id) => {
                debug!(%kind, "resolved token");
                Ok(job_id)
            }
            None => Err(AppError::NotFound(format!(
                "no mapping for token under kind '{kind}'"
            ))),
        }
    }
}
