mod ensure_insight;

pub use ensure_insight::{InsightProvisioner, InsightResult, UnavailableReason};
