//! Anthropic Messages API summarizer adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ports::{SummarizationError, Summarizer};
use crate::domain::summary::SummaryPrompt;

/// Claude model used for every summary
pub const MODEL: &str = "claude-sonnet-4-20250514";

/// Upper bound on summary length
pub const MAX_TOKENS: u32 = 1024;

/// Anthropic API base URL
const API_BASE_URL: &str = "https://api.anthropic.com";

/// Pinned API version header value
const API_VERSION: &str = "2023-06-01";

// Request types for the Messages API

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

// Response types for the Messages API

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

/// Summarizer backed by Claude
pub struct AnthropicSummarizer {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicSummarizer {
    /// Create a new summarizer with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a summarizer that talks to a different host
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Build the request body
    fn build_request<'a>(&self, prompt: &'a SummaryPrompt) -> MessagesRequest<'a> {
        MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt.content(),
            }],
        }
    }

    /// Concatenate the text blocks of a response
    fn extract_text(response: &MessagesResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .content
            .iter()
            .filter(|b| b.kind == "text")
            .filter_map(|b| b.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Pull a readable message out of an error body
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => match parsed.error.kind {
                Some(kind) => format!("{}: {}", kind, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl Summarizer for AnthropicSummarizer {
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummarizationError> {
        let url = self.api_url();
        let body = self.build_request(prompt);

        debug!(model = MODEL, chars = prompt.content().len(), "sending summary request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SummarizationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummarizationError::ApiError(format!(
                "HTTP {}: {}",
                status,
                Self::error_message(&error_text)
            )));
        }

        let response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| SummarizationError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(SummarizationError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(SummarizationError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizationError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}
