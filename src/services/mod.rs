//! Computational core and upstream integrations.
//!
//! Contains the water requirement estimator, the farming assistant gateway
//! and the Gemini client backing it.

pub mod assistant;
pub mod gemini;
pub mod water;

pub use assistant::{FarmingAssistant, TextGenerator};
pub use gemini::GeminiClient;
pub use water::WaterNeedEstimator;
