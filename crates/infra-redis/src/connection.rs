// Redis Connection Setup

use redis::aio::ConnectionManager;
use tracing::info;
use uuidmap_core::error::{AppError, Result};

/// Create a multiplexed Redis connection with automatic reconnection
pub async fn connect(redis_url: &str) -> Result<ConnectionManager> {
    let client = redis::Client::open(redis_url)
        .map_err(|e| AppError::Store(format!("Invalid Redis URL: {}", e)))?;

    info!("Connecting to Redis...");

    client
        .get_connection_manager()
        .await
        .map_err(|e| AppError::Store(format!("Redis connection failed: {}", e)))
}
