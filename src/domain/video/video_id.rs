//! Video ID value object

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::InvalidReferenceError;

/// Length of a canonical YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

/// URL forms a video ID can be extracted from, tried in order
static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"youtube\.com/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})",
        r"youtube\.com/v/([A-Za-z0-9_-]{11})",
        r"youtube\.com/shorts/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Value object for a canonical YouTube video identifier.
///
/// Only constructible through [`FromStr`], so holding one means the
/// reference was syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    fn is_bare_id(s: &str) -> bool {
        s.len() == VIDEO_ID_LEN
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    }
}

impl FromStr for VideoId {
    type Err = InvalidReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        for pattern in URL_PATTERNS.iter() {
            if let Some(id) = pattern.captures(input).and_then(|c| c.get(1)) {
                return Ok(Self(id.as_str().to_string()));
            }
        }

        if Self::is_bare_id(input) {
            return Ok(Self(input.to_string()));
        }

        Err(InvalidReferenceError {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
