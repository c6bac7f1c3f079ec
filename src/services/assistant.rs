//! Farming assistant gateway.
//!
//! Wraps a single text-generation call with the KisanBot persona and turns
//! every failure into one of the configured fallback messages. Callers
//! always get a displayable string back.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::domain::assistant::{AssistantError, AssistantPrompts};

/// Failure reported by a text-generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("upstream rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("invalid upstream response: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Credential or configuration problems, as opposed to transient ones.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Rejected { status, message } => {
                matches!(status, 401 | 403) || message.contains("API key")
            }
            Self::Transport(message) | Self::Malformed(message) => message.contains("API key"),
        }
    }
}

/// A hosted large-language-model endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`. `Ok(None)` means the upstream answered
    /// without any usable text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;

    /// Lightweight reachability check.
    async fn health_check(&self) -> anyhow::Result<()>;

    fn model_id(&self) -> &str;
}

#[derive(Clone)]
pub struct FarmingAssistant {
    generator: Arc<dyn TextGenerator>,
    prompts: AssistantPrompts,
}

impl FarmingAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>, prompts: AssistantPrompts) -> Self {
        Self { generator, prompts }
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }

    /// The user message is embedded verbatim after the persona prefix.
    pub fn build_prompt(&self, message: &str) -> String {
        format!("{}{}", self.prompts.persona_prefix, message)
    }

    /// Ask the model, surfacing the failure kind.
    pub async fn try_answer(&self, message: &str) -> Result<String, AssistantError> {
        if message.trim().is_empty() {
            return Err(AssistantError::EmptyInput);
        }

        let prompt = self.build_prompt(message);
        debug!(model = self.generator.model_id(), prompt_len = prompt.len(), "Requesting answer");

        match self.generator.generate(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => Ok(text),
            Ok(_) => Err(AssistantError::UpstreamEmptyResponse),
            Err(e) if e.is_configuration() => {
                Err(AssistantError::UpstreamConfiguration(e.to_string()))
            }
            Err(e) => Err(AssistantError::UpstreamUnavailable(e.to_string())),
        }
    }

    /// Answer a farming question. Never fails: errors are logged and
    /// replaced by the matching fallback message.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub async fn answer(&self, message: &str) -> String {
        match self.try_answer(message).await {
            Ok(text) => text,
            Err(err) => {
                match &err {
                    AssistantError::EmptyInput => debug!("Empty chat message"),
                    AssistantError::UpstreamConfiguration(_) => {
                        error!(error = %err, "Assistant upstream misconfigured")
                    }
                    AssistantError::UpstreamEmptyResponse
                    | AssistantError::UpstreamUnavailable(_) => {
                        warn!(error = %err, "Assistant upstream failed")
                    }
                }
                self.prompts.fallback_for(&err).to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    pub(crate) enum Reply {
        Text(Option<String>),
        Fail(fn() -> GenerationError),
    }

    /// Scripted generator that counts calls and records the last prompt.
    pub(crate) struct MockGenerator {
        reply: Reply,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        reachable: AtomicBool,
    }

    impl MockGenerator {
        pub(crate) fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                reachable: AtomicBool::new(true),
            })
        }

        pub(crate) fn answering(text: &str) -> Arc<Self> {
            Self::new(Reply::Text(Some(text.to_string())))
        }

        /// Make subsequent health checks fail.
        pub(crate) fn go_offline(&self) {
            self.reachable.store(false, Ordering::SeqCst);
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_prompt(&self) -> Option<String> {
            self.last_prompt.lock().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock() = Some(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail(make) => Err(make()),
            }
        }

        async fn health_check(&self) -> anyhow::Result<()> {
            if self.reachable.load(Ordering::SeqCst) {
                Ok(())
            } else {
                anyhow::bail!("model endpoint unreachable")
            }
        }

        fn model_id(&self) -> &str {
            "mock-model"
        }
    }

    fn assistant(generator: Arc<MockGenerator>) -> FarmingAssistant {
        FarmingAssistant::new(generator, AssistantPrompts::default())
    }

    #[tokio::test]
    async fn empty_message_short_circuits_without_upstream_call() {
        let generator = MockGenerator::answering("should not be used");
        let bot = assistant(generator.clone());

        assert_eq!(bot.answer("").await, "Please enter a question about farming.");
        assert_eq!(bot.answer("   \n\t").await, "Please enter a question about farming.");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn answer_returns_model_text_verbatim() {
        let generator = MockGenerator::answering("  Harvest when grains are hard.\n");
        let bot = assistant(generator.clone());

        let answer = bot.answer("is my wheat ready to harvest?").await;
        assert_eq!(answer, "  Harvest when grains are hard.\n");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn prompt_embeds_message_after_persona() {
        let generator = MockGenerator::answering("ok");
        let bot = assistant(generator.clone());

        bot.answer("  leaf curl in brinjal  ").await;
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.starts_with("You are KisanBot"));
        assert!(prompt.ends_with("farming-related question:   leaf curl in brinjal  "));
    }

    #[tokio::test]
    async fn empty_upstream_text_falls_back_to_generic_message() {
        for reply in [Reply::Text(Some(String::new())), Reply::Text(None)] {
            let generator = MockGenerator::new(reply);
            let bot = assistant(generator.clone());

            let answer = bot.answer("is my wheat ready to harvest?").await;
            assert_eq!(answer, AssistantPrompts::default().unavailable_fallback);
            assert_eq!(
                bot.try_answer("is my wheat ready to harvest?").await,
                Err(AssistantError::UpstreamEmptyResponse)
            );
        }
    }

    #[tokio::test]
    async fn api_key_errors_map_to_configuration_fallback() {
        let generator = MockGenerator::new(Reply::Fail(|| GenerationError::Rejected {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        }));
        let bot = assistant(generator);

        let answer = bot.answer("best time to sow wheat?").await;
        assert_eq!(
            answer,
            "There seems to be an issue with the API configuration. Please try again later."
        );
    }

    #[tokio::test]
    async fn auth_status_maps_to_configuration_error() {
        let generator = MockGenerator::new(Reply::Fail(|| GenerationError::Rejected {
            status: 403,
            message: "Permission denied".to_string(),
        }));
        let bot = assistant(generator);

        assert!(matches!(
            bot.try_answer("hello").await,
            Err(AssistantError::UpstreamConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn transport_failures_map_to_generic_fallback() {
        let generator = MockGenerator::new(Reply::Fail(|| {
            GenerationError::Transport("operation timed out".to_string())
        }));
        let bot = assistant(generator);

        assert!(matches!(
            bot.try_answer("hello").await,
            Err(AssistantError::UpstreamUnavailable(_))
        ));
        assert_eq!(
            bot.answer("hello").await,
            AssistantPrompts::default().unavailable_fallback
        );
    }

    #[tokio::test]
    async fn custom_persona_is_used() {
        let generator = MockGenerator::answering("ok");
        let bot = FarmingAssistant::new(
            generator.clone(),
            AssistantPrompts::default().with_persona("Answer briefly: "),
        );

        bot.answer("rain tomorrow?").await;
        assert_eq!(generator.last_prompt().as_deref(), Some("Answer briefly: rain tomorrow?"));
    }
}
