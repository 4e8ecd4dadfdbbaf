//! Summary domain module

mod summary_prompt;

pub use summary_prompt::{SummaryPrompt, MAX_TRANSCRIPT_CHARS, TRUNCATION_MARKER};
