//! InnerTube player response types and caption track selection

use serde::{Deserialize, Serialize};

use crate::application::ports::TranscriptError;

/// Client identity sent with player requests
pub(crate) const CLIENT_NAME: &str = "ANDROID";
pub(crate) const CLIENT_VERSION: &str = "20.10.38";

// Request types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerRequest<'a> {
    pub context: RequestContext<'a>,
    pub video_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContext<'a> {
    pub client: ClientInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientInfo<'a> {
    pub client_name: &'a str,
    pub client_version: &'a str,
}

impl<'a> PlayerRequest<'a> {
    pub fn new(video_id: &'a str) -> Self {
        Self {
            context: RequestContext {
                client: ClientInfo {
                    client_name: CLIENT_NAME,
                    client_version: CLIENT_VERSION,
                },
            },
            video_id,
        }
    }
}

// Response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    pub tracklist: Option<Tracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Auto-generated tracks are marked with kind "asr"
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl PlayerResponse {
    /// Fail unless the video is playable
    pub fn check_playability(&self) -> Result<(), TranscriptError> {
        let Some(status) = &self.playability_status else {
            return Ok(());
        };

        match status.status.as_str() {
            "OK" => Ok(()),
            "LOGIN_REQUIRED"
                if status
                    .reason
                    .as_deref()
                    .is_some_and(|r| r.contains("not a bot")) =>
            {
                Err(TranscriptError::Blocked)
            }
            other => Err(TranscriptError::VideoUnavailable {
                reason: status
                    .reason
                    .clone()
                    .unwrap_or_else(|| other.to_string()),
            }),
        }
    }

    /// All caption tracks; empty when captions are disabled
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|c| c.tracklist.as_ref())
            .map(|t| t.caption_tracks.as_slice())
            .unwrap_or(&[])
    }
}

fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Pick the track for `language`.
///
/// Order: manual exact match, manual same primary language, generated exact
/// match, generated same primary language.
pub(crate) fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    language: &str,
) -> Result<&'a CaptionTrack, TranscriptError> {
    if tracks.is_empty() {
        return Err(TranscriptError::CaptionsDisabled);
    }

    let exact = |t: &&CaptionTrack| t.language_code.eq_ignore_ascii_case(language);
    let primary = |t: &&CaptionTrack| {
        primary_subtag(&t.language_code).eq_ignore_ascii_case(primary_subtag(language))
    };

    let manual = || tracks.iter().filter(|t| !t.is_generated());
    let generated = || tracks.iter().filter(|t| t.is_generated());

    manual()
        .find(exact)
        .or_else(|| manual().find(primary))
        .or_else(|| generated().find(exact))
        .or_else(|| generated().find(primary))
        .ok_or_else(|| TranscriptError::NoTranscriptFound {
            language: language.to_string(),
            available: tracks.iter().map(|t| t.language_code.clone()).collect(),
        })
}
