//! Mock insight generator for testing.
//!
//! Returns a canned payload or a configured failure without any network
//! calls. Not for production use.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::foundation::Industry;
use crate::domain::insight::InsightPayload;
use crate::ports::{GeneratorError, InsightGenerator};

/// Deterministic generator double.
pub struct MockInsightGenerator {
    payload: Option<InsightPayload>,
    calls: AtomicUsize,
}

impl MockInsightGenerator {
    /// Generator that always succeeds with `payload`.
    pub fn returning(payload: InsightPayload) -> Self {
        Self {
            payload: Some(payload),
            calls: AtomicUsize::new(0),
        }
    }

    /// Generator that always fails with a network error.
    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generation attempts observed (for test assertions).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InsightGenerator for MockInsightGenerator {
    async fn generate(&self, industry: &Industry) -> Result<InsightPayload, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(GeneratorError::network(format!(
                "mock generator configured to fail for {}",
                industry
            ))),
        }
    }
}
