// Domain Layer - Pure business logic and entities

pub mod keys;
pub mod token;

// Re-exports
pub use keys::StoreKey;
pub use token::{JobId, Kind, Token, DEFAULT_KIND};
