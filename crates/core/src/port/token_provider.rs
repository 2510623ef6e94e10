// Token Provider Port (for deterministic testing)

/// Token generator interface (allows deterministic tokens in tests)
pub trait TokenProvider: Send + Sync {
    /// Generate a new unguessable token
    fn generate_token(&self) -> String;
}

/// UUID v4 provider (production)
///
/// Cryptographically strong randomness; the 122-bit space makes collision
/// probability negligible within a namespace.
pub struct UuidTokenProvider;

impl TokenProvider for UuidTokenProvider {
    fn generate_token(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
