// uuidmap Infrastructure - In-Memory Adapter
// Implements: KeyValueStore

mod store;

pub use store::MemoryKvStore;
