//! Industry insight aggregate.

mod record;

pub use record::{IndustryInsight, InsightPayload, NewIndustryInsight, INSIGHT_REFRESH_HORIZON};
