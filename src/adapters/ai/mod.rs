//! Adapters for the external insight generation call.

mod gemini_generator;
mod mock_generator;

pub use gemini_generator::{GeminiConfig, GeminiInsightGenerator};
pub use mock_generator::MockInsightGenerator;
