//! Video source port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::CaptionFragment;
use crate::domain::video::VideoId;

/// Transcript retrieval errors. All of them mean no transcript is available
/// for this run.
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video")]
    CaptionsDisabled,

    #[error("Video is unavailable: {reason}")]
    VideoUnavailable { reason: String },

    #[error("No transcript found for language '{language}'. Available: {}", display_languages(.available))]
    NoTranscriptFound {
        language: String,
        available: Vec<String>,
    },

    #[error("YouTube is blocking requests from this IP (too many requests or captcha)")]
    Blocked,

    #[error("Transcript is empty")]
    EmptyTranscript,

    #[error("Transcript request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse transcript response: {0}")]
    ParseError(String),
}

fn display_languages(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Caption track content as returned by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedCaptions {
    /// Language code of the chosen track (e.g. "en", "en-GB")
    pub language_code: String,
    /// Whether the track was auto-generated
    pub is_generated: bool,
    /// Caption lines in chronological order
    pub fragments: Vec<CaptionFragment>,
}

/// Port for looking up video metadata and captions
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetch the human-readable video title.
    async fn title(&self, video_id: &VideoId) -> Result<String, TranscriptError>;

    /// Fetch the caption track for a video.
    ///
    /// # Arguments
    /// * `video_id` - The video to fetch captions for
    /// * `language` - Preferred language code
    ///
    /// # Returns
    /// The caption fragments of the best matching track or an error
    async fn captions(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<FetchedCaptions, TranscriptError>;
}
