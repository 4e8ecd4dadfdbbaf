//! Summarization adapters

mod anthropic;

pub use anthropic::{AnthropicSummarizer, MAX_TOKENS, MODEL};
