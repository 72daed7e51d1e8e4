//! Redis adapter for the CacheInvalidator port.
//!
//! Publishes the stale path on a fixed channel; the presentation layer
//! subscribes and recomputes its cached views. Fire-and-forget: PUBLISH
//! returns the subscriber count, which we ignore.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::ports::{CacheInvalidator, InvalidationError};

/// Channel the presentation layer's cache listens on.
const INVALIDATION_CHANNEL: &str = "cache.invalidate";

/// Redis pub/sub implementation of CacheInvalidator.
pub struct RedisInvalidator {
    client: redis::Client,
}

impl RedisInvalidator {
    /// Creates an invalidator from a Redis URL.
    pub fn new(url: &str) -> Result<Self, InvalidationError> {
        let client = redis::Client::open(url)
            .map_err(|e| InvalidationError::new(format!("Invalid Redis URL: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheInvalidator for RedisInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| InvalidationError::new(format!("Redis connection failed: {}", e)))?;

        let _subscribers: i64 = conn
            .publish(INVALIDATION_CHANNEL, path)
            .await
            .map_err(|e| InvalidationError::new(format!("Publish failed: {}", e)))?;

        Ok(())
    }
}
