// uuidmap Infrastructure - Redis Adapter
// Implements: KeyValueStore

mod connection;
mod store;

pub use connection::connect;
pub use store::RedisKvStore;

// Note: redis::RedisError conversion is handled by wrapping in helper
// functions due to Rust's orphan rules (cannot implement
// From<redis::RedisError> for AppError here)
