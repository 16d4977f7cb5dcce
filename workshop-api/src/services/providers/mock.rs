//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum MockBehavior {
    Reply(String),
    Fail(String),
}

/// Mock text provider with a canned reply or failure. Records every prompt it receives.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Always answer with `text`, verbatim.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(text.into()))
    }

    /// Always fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(message.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: (prompt.len() / 4) as i32,
                output_tokens: (text.len() / 4) as i32,
                finish_reason: FinishReason::Complete,
            }),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
