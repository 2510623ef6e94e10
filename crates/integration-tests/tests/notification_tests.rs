// Notification Tracker Integration Tests

use std::sync::Arc;

use uuidmap_core::application::mapping::{CreateRequest, MappingService};
use uuidmap_core::application::notification::NotificationTracker;
use uuidmap_core::port::token_provider::UuidTokenProvider;
use uuidmap_infra_memory::MemoryKvStore;

#[tokio::test]
async fn test_never_notified_reads_false() {
    let tracker = NotificationTracker::new(Arc::new(MemoryKvStore::new()));

    assert!(!tracker.is_notified("job-1").await.unwrap());
}

#[tokio::test]
async fn test_notification_toggle() {
    let tracker = NotificationTracker::new(Arc::new(MemoryKvStore::new()));

    tracker.set_notified("job-1", false).await.unwrap();
    assert!(!tracker.is_notified("job-1").await.unwrap());

    tracker.set_notified("job-1", true).await.unwrap();
    assert!(tracker.is_notified("job-1").await.unwrap());

    tracker.set_notified("job-1", false).await.unwrap();
    assert!(!tracker.is_notified("job-1").await.unwrap());
}

#[tokio::test]
async fn test_flags_are_per_job() {
    let tracker = NotificationTracker::new(Arc::new(MemoryKvStore::new()));

    tracker.set_notified("job-1", true).await.unwrap();

    assert!(tracker.is_notified("job-1").await.unwrap());
    assert!(!tracker.is_notified("job-2").await.unwrap());
}

#[tokio::test]
async fn test_flag_is_independent_of_mappings() {
    // One shared store: flags and mappings for the same identifier value
    // must not interfere
    let store = Arc::new(MemoryKvStore::new());
    let service = MappingService::new(store.clone(), Arc::new(UuidTokenProvider));
    let tracker = NotificationTracker::new(store);

    service
        .create(CreateRequest::new("job-1").with_token("job-1"))
        .await
        .unwrap();
    tracker.set_notified("job-1", true).await.unwrap();

    assert!(tracker.is_notified("job-1").await.unwrap());
    assert_eq!(service.resolve("job-1", None).await.unwrap(), "job-1");
}
