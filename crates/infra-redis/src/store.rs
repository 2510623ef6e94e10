// Redis KeyValueStore Implementation

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use uuidmap_core::error::{AppError, Result};
use uuidmap_core::port::KeyValueStore;

// Helper to convert redis::RedisError to AppError with structured information
fn map_redis_error(err: redis::RedisError) -> AppError {
    match err.kind() {
        redis::ErrorKind::IoError => {
            AppError::Store(format!("Redis connection error: {}", err))
        }
        redis::ErrorKind::AuthenticationFailed => {
            AppError::Store(format!("Redis authentication failed: {}", err))
        }
        redis::ErrorKind::TypeError => {
            AppError::Store(format!("Unexpected Redis reply type: {}", err))
        }
        redis::ErrorKind::ResponseError => {
            AppError::Store(format!("Redis command rejected: {}", err))
        }
        _ => AppError::Store(format!("Redis error: {}", err)),
    }
}

pub struct RedisKvStore {
    con: ConnectionManager,
}

impl RedisKvStore {
    pub fn new(con: ConnectionManager) -> Self {
        Self { con }
    }
}

#[async_trait]
impl KeyValueStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut con = self.con.clone();
        con.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut con = self.con.clone();
        match ttl {
            Some(ttl) => con
                .pset_ex(key, value, ttl.as_millis() as u64)
                .await
                .map_err(map_redis_error),
            None => con.set(key, value).await.map_err(map_redis_error),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut con = self.con.clone();
        con.exists(key).await.map_err(map_redis_error)
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<bool> {
        let mut con = self.con.clone();

        // SET ... NX [PX ms]: Redis applies the conditional check and the
        // write atomically, which is what makes reversible-mode creation
        // race-free. Reply is OK when claimed, nil otherwise.
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("NX");
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(ttl.as_millis() as u64);
        }

        let reply: Option<String> = cmd
            .query_async(&mut con)
            .await
            .map_err(map_redis_error)?;
        Ok(reply.is_some())
    }
}
