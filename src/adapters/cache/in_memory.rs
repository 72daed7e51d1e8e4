//! In-memory invalidator for testing.
//!
//! Records every signaled path for assertions. Not for production use.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{CacheInvalidator, InvalidationError};

/// Recording test double for the invalidation signal.
pub struct InMemoryInvalidator {
    paths: Mutex<Vec<String>>,
    should_fail: bool,
}

impl InMemoryInvalidator {
    /// Creates an invalidator that accepts every signal.
    pub fn new() -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    /// Creates an invalidator that fails every signal (still recording it).
    pub fn failing() -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    /// Returns all signaled paths (for test assertions).
    pub fn signaled_paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .expect("InMemoryInvalidator: lock poisoned")
            .clone()
    }
}

impl Default for InMemoryInvalidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInvalidator for InMemoryInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError> {
        self.paths
            .lock()
            .expect("InMemoryInvalidator: lock poisoned")
            .push(path.to_string());
        if self.should_fail {
            return Err(InvalidationError::new("configured to fail"));
        }
        Ok(())
    }
}
