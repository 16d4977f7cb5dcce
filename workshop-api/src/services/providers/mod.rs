//! Text generation provider abstraction.
//!
//! Handlers only see [`TextProvider`], so the Gemini adapter can be swapped
//! for [`mock::MockTextProvider`] in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Empty response from provider")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completed generation.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Completion text, untrimmed.
    pub text: String,

    /// Input tokens consumed, when reported.
    pub input_tokens: i32,

    /// Output tokens generated, when reported.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

impl FinishReason {
    /// Map Gemini's `finishReason` string. Unknown or missing reasons count as complete.
    pub fn from_gemini(reason: Option<&str>) -> Self {
        match reason {
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") => FinishReason::ContentFilter,
            _ => FinishReason::Complete,
        }
    }
}

/// A prompt-completion service: one free-text prompt in, one completion out.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`. Called at most once per request.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(FinishReason::from_gemini(Some("STOP")), FinishReason::Complete);
        assert_eq!(FinishReason::from_gemini(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(
            FinishReason::from_gemini(Some("SAFETY")),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_gemini(None), FinishReason::Complete);
    }

    #[test]
    fn empty_response_has_a_message() {
        assert!(!ProviderError::EmptyResponse.to_string().is_empty());
    }
}
