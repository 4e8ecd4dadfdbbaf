//! YouTube video source adapter (InnerTube captions + oEmbed title)

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::application::ports::{FetchedCaptions, TranscriptError, VideoSource};
use crate::domain::video::VideoId;

use super::player::{select_track, PlayerRequest, PlayerResponse};
use super::timedtext::{json3_url, parse_json3};

/// YouTube base URL
const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

/// Watch pages are localized; captions metadata is requested in English
const ACCEPT_LANGUAGE: &str = "en-US";

static API_KEY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).ok());

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
}

/// Fetches titles and captions from YouTube
pub struct YouTubeClient {
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Create a client for youtube.com
    pub fn new() -> Self {
        Self::with_base_url(YOUTUBE_BASE_URL)
    }

    /// Create a client that talks to a different host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn watch_url(&self, video_id: &VideoId) -> String {
        format!("{}/watch?v={}", self.base_url, video_id)
    }

    fn player_url(&self, api_key: &str) -> String {
        format!("{}/youtubei/v1/player?key={}", self.base_url, api_key)
    }

    fn oembed_url(&self) -> String {
        format!("{}/oembed", self.base_url)
    }

    /// Read the InnerTube API key from a watch page
    fn extract_api_key(html: &str) -> Result<String, TranscriptError> {
        if let Some(key) = API_KEY_PATTERN
            .as_ref()
            .and_then(|re| re.captures(html))
            .and_then(|c| c.get(1))
        {
            return Ok(key.as_str().to_string());
        }

        if html.contains("class=\"g-recaptcha\"") {
            return Err(TranscriptError::Blocked);
        }

        Err(TranscriptError::ParseError(
            "INNERTUBE_API_KEY not found in watch page".to_string(),
        ))
    }

    async fn get_text(&self, url: &str) -> Result<String, TranscriptError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptError::Blocked);
        }
        if !status.is_success() {
            return Err(TranscriptError::RequestFailed(format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))
    }

    async fn fetch_player(
        &self,
        video_id: &VideoId,
        api_key: &str,
    ) -> Result<PlayerResponse, TranscriptError> {
        let response = self
            .client
            .post(self.player_url(api_key))
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .json(&PlayerRequest::new(video_id.as_str()))
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptError::Blocked);
        }
        if !status.is_success() {
            return Err(TranscriptError::RequestFailed(format!(
                "player request returned HTTP {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranscriptError::ParseError(e.to_string()))
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn title(&self, video_id: &VideoId) -> Result<String, TranscriptError> {
        let response = self
            .client
            .get(self.oembed_url())
            .query(&[("url", video_id.watch_url().as_str()), ("format", "json")])
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::NOT_FOUND {
            return Err(TranscriptError::VideoUnavailable {
                reason: format!("oEmbed returned HTTP {}", status),
            });
        }
        if !status.is_success() {
            return Err(TranscriptError::RequestFailed(format!("HTTP {}", status)));
        }

        let body: OEmbedResponse = response
            .json()
            .await
            .map_err(|e| TranscriptError::ParseError(e.to_string()))?;

        Ok(body.title)
    }

    async fn captions(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<FetchedCaptions, TranscriptError> {
        let html = self.get_text(&self.watch_url(video_id)).await?;
        let api_key = Self::extract_api_key(&html)?;

        let player = self.fetch_player(video_id, &api_key).await?;
        player.check_playability()?;

        let track = select_track(player.caption_tracks(), language)?;
        debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "selected caption track"
        );

        let body = self.get_text(&json3_url(&track.base_url)).await?;
        if body.trim().is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        let fragments =
            parse_json3(&body).map_err(|e| TranscriptError::ParseError(e.to_string()))?;

        Ok(FetchedCaptions {
            language_code: track.language_code.clone(),
            is_generated: track.is_generated(),
            fragments,
        })
    }
}
