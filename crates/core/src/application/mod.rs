// Application Layer - Use Cases and Business Logic

pub mod mapping;
pub mod notification;

// Re-exports
pub use mapping::{CreateRequest, MappingService};
pub use notification::NotificationTracker;
