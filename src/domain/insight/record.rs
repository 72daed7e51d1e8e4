//! Derived industry insight record, shared across users of one industry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Industry, IndustryInsightId};

/// Fixed refresh horizon stamped into `next_update` at creation time.
///
/// Insights are eventually-stale, not real-time; this crate records the
/// horizon but never acts on it (creation-if-absent only, no
/// refresh-if-stale).
pub const INSIGHT_REFRESH_HORIZON: Duration = Duration::days(7);

/// Generated insight content, opaque to this crate.
///
/// The generator returns an associative payload (salary ranges, growth
/// rate, top skills, ...); we store and serve it without interpreting the
/// individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightPayload(pub serde_json::Map<String, serde_json::Value>);

impl InsightPayload {
    /// Wraps a generated payload object.
    pub fn new(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(fields)
    }

    /// Returns the underlying JSON object.
    pub fn as_object(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }
}

/// A persisted industry insight.
///
/// At most one record exists per industry key at any time; the uniqueness
/// constraint at the persistence layer enforces this, not application
/// locking. Existing records are never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryInsight {
    pub id: IndustryInsightId,
    pub industry: Industry,
    pub payload: InsightPayload,

    /// When the record should be considered stale. Advisory only.
    pub next_update: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

impl IndustryInsight {
    /// Returns true once the refresh horizon has passed.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_update
    }
}

/// A not-yet-persisted insight, produced by the provisioner before insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIndustryInsight {
    pub industry: Industry,
    pub payload: InsightPayload,
    pub next_update: DateTime<Utc>,
}

impl NewIndustryInsight {
    /// Builds a new insight with `next_update` at the fixed refresh horizon.
    pub fn generated_at(industry: Industry, payload: InsightPayload, now: DateTime<Utc>) -> Self {
        Self {
            industry,
            payload,
            next_update: now + INSIGHT_REFRESH_HORIZON,
        }
    }
}
