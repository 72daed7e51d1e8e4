//! CacheInvalidator port - downstream invalidation signal.
//!
//! After a successful profile write, dependent readers are told that cached
//! views of the home surface are stale. The signal is fire-and-forget: no
//! acknowledgment is awaited and failure never downgrades a successful
//! update.

use async_trait::async_trait;
use thiserror::Error;

/// Logical path whose cached presentation data is recomputed after a
/// profile update.
pub const HOME_SURFACE_PATH: &str = "/";

/// Notifies downstream caches that a logical path is stale.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Signal that cached data for `path` should be recomputed.
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError>;
}

/// Failure delivering the invalidation signal.
#[derive(Debug, Clone, Error)]
#[error("Invalidation signal failed: {0}")]
pub struct InvalidationError(pub String);

impl InvalidationError {
    /// Creates an invalidation error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_invalidator_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CacheInvalidator) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CacheInvalidator>>();
    }
}
