// Port Layer - Interfaces for external dependencies

pub mod kv_store;
pub mod time_provider;
pub mod token_provider; // For deterministic testing

// Re-exports
pub use kv_store::KeyValueStore;
pub use time_provider::{SystemTimeProvider, TimeProvider};
pub use token_provider::{TokenProvider, UuidTokenProvider};

#[cfg(test)]
pub use kv_store::MockKeyValueStore;
