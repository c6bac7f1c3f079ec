//! Farming assistant domain models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the assistant could not produce a model answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("empty message")]
    EmptyInput,

    #[error("upstream configuration problem: {0}")]
    UpstreamConfiguration(String),

    #[error("empty response from upstream")]
    UpstreamEmptyResponse,

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

/// Persona prefix and user-facing fallback messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantPrompts {
    pub persona_prefix: String,
    pub empty_input_fallback: String,
    pub configuration_fallback: String,
    pub unavailable_fallback: String,
}

impl Default for AssistantPrompts {
    fn default() -> Self {
        Self {
            persona_prefix: "You are KisanBot, a farming assistant that helps farmers with \
                             agricultural queries. Please provide a helpful response to this \
                             farming-related question: "
                .to_string(),
            empty_input_fallback: "Please enter a question about farming.".to_string(),
            configuration_fallback:
                "There seems to be an issue with the API configuration. Please try again later."
                    .to_string(),
            unavailable_fallback: "I apologize, but I'm having trouble processing your request \
                                   right now. Please try again later."
                .to_string(),
        }
    }
}

impl AssistantPrompts {
    pub fn with_persona(mut self, persona_prefix: impl Into<String>) -> Self {
        self.persona_prefix = persona_prefix.into();
        self
    }

    /// The message shown to the farmer for a given failure.
    pub fn fallback_for(&self, err: &AssistantError) -> &str {
        match err {
            AssistantError::EmptyInput => &self.empty_input_fallback,
            AssistantError::UpstreamConfiguration(_) => &self.configuration_fallback,
            AssistantError::UpstreamEmptyResponse | AssistantError::UpstreamUnavailable(_) => {
                &self.unavailable_fallback
            }
        }
    }
}

/// Suggested starter questions shown beside the chat box.
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "fertilizer for sugarcane",
    "leaf curl in brinjal",
    "when to harvest rice",
];

// =============================================================================
// Request/Response DTOs for API endpoints
// =============================================================================

/// Request for `POST /assistant/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Response for `POST /assistant/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
