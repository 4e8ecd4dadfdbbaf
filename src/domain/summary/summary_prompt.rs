//! Summary prompt value object

use crate::domain::transcript::Transcript;

/// Fixed instruction sent ahead of every transcript
const INSTRUCTION: &str = r#"Below is a transcript of a YouTube video. Please provide a structured summary with:
1. A one-line TLDR
2. Key points (bulleted)
3. A brief conclusion

Keep the summary concise and readable."#;

/// Transcripts longer than this many characters are cut before sending
pub const MAX_TRANSCRIPT_CHARS: usize = 100_000;

/// Marker appended to a cut transcript
pub const TRUNCATION_MARKER: &str = "\n[transcript truncated]";

/// Value object holding the complete user message for a summary request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    content: String,
    truncated: bool,
}

impl SummaryPrompt {
    /// Build the prompt for a transcript
    pub fn build(transcript: &Transcript) -> Self {
        Self::from_text(transcript.text())
    }

    /// Build the prompt from raw transcript text
    pub fn from_text(text: &str) -> Self {
        let (body, truncated) = truncate_chars(text, MAX_TRANSCRIPT_CHARS);
        let marker = if truncated { TRUNCATION_MARKER } else { "" };
        let content = format!("{}\n\nTRANSCRIPT:\n{}{}", INSTRUCTION, body, marker);
        Self { content, truncated }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the transcript had to be cut
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Cut `text` to at most `max` characters on a char boundary
fn truncate_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}
