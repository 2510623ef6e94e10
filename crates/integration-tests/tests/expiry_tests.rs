// Expiry Integration Tests
// Deterministic TTL behavior via a manually advanced clock

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use uuidmap_core::application::mapping::{CreateRequest, MappingService};
use uuidmap_core::application::notification::NotificationTracker;
use uuidmap_core::port::time_provider::TimeProvider;
use uuidmap_core::port::token_provider::UuidTokenProvider;
use uuidmap_infra_memory::MemoryKvStore;

struct ManualClock(AtomicI64);

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(1_000)))
    }

    fn advance(&self, delta: Duration) {
        self.0.fetch_add(delta.as_millis() as i64, Ordering::SeqCst);
    }
}

impl TimeProvider for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

fn fixture() -> (Arc<ManualClock>, Arc<MemoryKvStore>, MappingService) {
    let clock = ManualClock::new();
    let store = Arc::new(MemoryKvStore::with_time_provider(clock.clone()));
    let service = MappingService::new(store.clone(), Arc::new(UuidTokenProvider));
    (clock, store, service)
}

#[tokio::test]
async fn test_expired_mapping_resolves_as_not_found() {
    let (clock, _store, service) = fixture();

    let token = service
        .create(CreateRequest::new("job-1").with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();
    assert_eq!(service.resolve(&token, None).await.unwrap(), "job-1");

    clock.advance(Duration::from_secs(11));

    let err = service.resolve(&token, None).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_reversible_create_mints_fresh_token_after_expiry() {
    let (clock, _store, service) = fixture();

    let first = service
        .create(CreateRequest::new("job-1").unique().with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();

    clock.advance(Duration::from_secs(11));

    let second = service
        .create(CreateRequest::new("job-1").unique().with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(service.resolve(&second, None).await.unwrap(), "job-1");
}

#[tokio::test]
async fn test_reversible_reuse_does_not_refresh_expiry() {
    let (clock, _store, service) = fixture();

    let first = service
        .create(CreateRequest::new("job-1").unique().with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();

    // Reuse halfway through the lifetime returns the same token but must
    // not extend it
    clock.advance(Duration::from_secs(6));
    let second = service
        .create(CreateRequest::new("job-1").unique().with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();
    assert_eq!(first, second);

    clock.advance(Duration::from_secs(5));
    let err = service.resolve(&first, None).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_notification_flag_outlives_mapping() {
    let (clock, store, service) = fixture();
    let tracker = NotificationTracker::new(store);

    let token = service
        .create(CreateRequest::new("job-1").with_ttl(Duration::from_secs(10)))
        .await
        .unwrap();
    tracker.set_notified("job-1", true).await.unwrap();

    clock.advance(Duration::from_secs(11));

    assert!(service.resolve(&token, None).await.is_err());
    assert!(tracker.is_notified("job-1").await.unwrap());
}
