//! Transcript value objects

/// A single timed caption line as returned by the transcript provider
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionFragment {
    text: String,
    start_ms: u64,
    duration_ms: u64,
}

impl CaptionFragment {
    /// Create a fragment with timing information
    pub fn new(text: impl Into<String>, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            duration_ms,
        }
    }

    /// Create a fragment without timing (start and duration of zero)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, 0, 0)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset at which this line stops being shown
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }
}

/// Full caption text of a video together with its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    title: String,
    text: String,
}

impl Transcript {
    /// Create a transcript from already-joined text
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Join caption fragments into one blob.
    ///
    /// Fragments keep their given order. Each one is trimmed and empty ones
    /// are dropped; the rest are separated by a single space.
    pub fn from_fragments(title: impl Into<String>, fragments: &[CaptionFragment]) -> Self {
        Self::new(title, join_fragments(fragments))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Playback time covered by the fragments, in milliseconds
pub fn caption_span_ms(fragments: &[CaptionFragment]) -> u64 {
    fragments.iter().map(CaptionFragment::end_ms).max().unwrap_or(0)
}

/// Join fragment texts with single spaces
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(texts: &[&str]) -> Vec<CaptionFragment> {
        texts.iter().map(|t| CaptionFragment::text_only(*t)).collect()
    }

    #[test]
    fn joins_hello_world() {
        let transcript = Transcript::from_fragments("t", &fragments(&["Hello ", "world."]));
        assert_eq!(transcript.text(), "Hello world.");
    }

    #[test]
    fn preserves_order() {
        let text = join_fragments(&fragments(&["one", "two", "three"]));
        assert_eq!(text, "one two three");
    }

    #[test]
    fn does_not_deduplicate() {
        let text = join_fragments(&fragments(&["again", "again"]));
        assert_eq!(text, "again again");
    }

    #[test]
    fn skips_blank_fragments() {
        let text = join_fragments(&fragments(&["a", "\n", "  ", "b"]));
        assert_eq!(text, "a b");
    }

    #[test]
    fn empty_input_gives_empty_transcript() {
        let transcript = Transcript::from_fragments("t", &[]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.char_count(), 0);
    }

    #[test]
    fn char_count_counts_chars_not_bytes() {
        let transcript = Transcript::new("t", "héllo");
        assert_eq!(transcript.char_count(), 5);
    }

    #[test]
    fn fragment_end_is_start_plus_duration() {
        let fragment = CaptionFragment::new("hi", 1500, 2000);
        assert_eq!(fragment.end_ms(), 3500);
    }

    #[test]
    fn span_covers_latest_fragment() {
        let timed = vec![
            CaptionFragment::new("a", 0, 1000),
            CaptionFragment::new("b", 5000, 1200),
            CaptionFragment::new("c", 4000, 500),
        ];
        assert_eq!(caption_span_ms(&timed), 6200);
        assert_eq!(caption_span_ms(&fragments(&["untimed"])), 0);
        assert_eq!(caption_span_ms(&[]), 0);
    }
}
