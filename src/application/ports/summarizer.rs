//! Summarization port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::summary::SummaryPrompt;

/// Summarization errors
#[derive(Debug, Clone, Error)]
pub enum SummarizationError {
    #[error("Invalid Anthropic API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty summary response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for transcript summarization
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a transcript.
    ///
    /// # Arguments
    /// * `prompt` - The instruction with the transcript embedded
    ///
    /// # Returns
    /// The summary text or an error
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummarizationError>;
}
