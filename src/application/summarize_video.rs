//! Summarize video use case

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::note::{Note, NotePath};
use crate::domain::summary::SummaryPrompt;
use crate::domain::transcript::{caption_span_ms, Transcript};
use crate::domain::video::VideoId;

use super::ports::{
    NoteStore, PublishError, SummarizationError, Summarizer, TranscriptError, VideoSource,
};

/// Fatal errors from the summarize use case
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Transcript unavailable: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("Summarization failed: {0}")]
    Summarization(#[from] SummarizationError),
}

/// Input parameters for the summarize use case
#[derive(Debug, Clone)]
pub struct SummarizeInput {
    /// Video to summarize
    pub video_id: VideoId,
    /// Preferred caption language
    pub language: String,
    /// Whether to write the note to the vault
    pub publish: bool,
    /// Vault folder for the note
    pub folder: String,
}

/// What happened to the note after it was printed
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// Publishing was disabled
    Skipped,
    /// Note written to the vault
    Saved(NotePath),
    /// Write failed; the note was still delivered on stdout
    Failed { path: NotePath, error: PublishError },
}

impl PublishOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Output from the summarize use case
#[derive(Debug, Clone)]
pub struct SummarizeOutput {
    pub note: Note,
    /// Transcript length in characters
    pub transcript_chars: usize,
    pub publish: PublishOutcome,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct SummarizeCallbacks {
    /// Called before any network call
    pub on_fetching_start: Option<Box<dyn Fn(&VideoId) + Send + Sync>>,
    /// Called with (title, transcript chars) once the transcript is in memory
    pub on_transcript_fetched: Option<Box<dyn Fn(&str, usize) + Send + Sync>>,
    /// Called before the summary request
    pub on_summarizing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called with the finished note, before publishing
    pub on_note_ready: Option<Box<dyn Fn(&Note) + Send + Sync>>,
    /// Called before the vault write
    pub on_publishing_start: Option<Box<dyn Fn(&NotePath) + Send + Sync>>,
}

/// One-shot fetch, summarize and publish pipeline
pub struct SummarizeVideoUseCase<V, S, N>
where
    V: VideoSource,
    S: Summarizer,
    N: NoteStore,
{
    source: V,
    summarizer: S,
    store: N,
}

impl<V, S, N> SummarizeVideoUseCase<V, S, N>
where
    V: VideoSource,
    S: Summarizer,
    N: NoteStore,
{
    /// Create a new use case instance
    pub fn new(source: V, summarizer: S, store: N) -> Self {
        Self {
            source,
            summarizer,
            store,
        }
    }

    /// Execute the pipeline.
    ///
    /// Transcript and summarization failures abort the run. A publish
    /// failure is reported in the output instead.
    pub async fn execute(
        &self,
        input: SummarizeInput,
        callbacks: SummarizeCallbacks,
    ) -> Result<SummarizeOutput, SummarizeError> {
        let video_id = &input.video_id;

        if let Some(ref cb) = callbacks.on_fetching_start {
            cb(video_id);
        }

        let title = self.fetch_title(video_id).await;

        let captions = self.source.captions(video_id, &input.language).await?;
        debug!(
            language = %captions.language_code,
            generated = captions.is_generated,
            fragments = captions.fragments.len(),
            span_ms = caption_span_ms(&captions.fragments),
            "fetched captions"
        );

        let transcript = Transcript::from_fragments(title, &captions.fragments);
        if transcript.is_empty() {
            return Err(TranscriptError::EmptyTranscript.into());
        }
        let transcript_chars = transcript.char_count();

        if let Some(ref cb) = callbacks.on_transcript_fetched {
            cb(transcript.title(), transcript_chars);
        }

        let prompt = SummaryPrompt::build(&transcript);
        if prompt.is_truncated() {
            warn!(chars = transcript_chars, "transcript truncated before summarizing");
        }

        if let Some(ref cb) = callbacks.on_summarizing_start {
            cb();
        }

        let summary = self.summarizer.summarize(&prompt).await?;
        let note = Note::new(video_id.clone(), transcript.title(), summary);

        if let Some(ref cb) = callbacks.on_note_ready {
            cb(&note);
        }

        let publish = if input.publish {
            let path = NotePath::new(&input.folder, &note);

            if let Some(ref cb) = callbacks.on_publishing_start {
                cb(&path);
            }

            match self.store.put(&path, &note.render()).await {
                Ok(()) => {
                    info!(path = %path, "note saved");
                    PublishOutcome::Saved(path)
                }
                Err(error) => PublishOutcome::Failed { path, error },
            }
        } else {
            PublishOutcome::Skipped
        };

        Ok(SummarizeOutput {
            note,
            transcript_chars,
            publish,
        })
    }

    /// Title lookup failures fall back to the video ID
    async fn fetch_title(&self, video_id: &VideoId) -> String {
        match self.source.title(video_id).await {
            Ok(title) if !title.trim().is_empty() => title,
            Ok(_) => video_id.to_string(),
            Err(e) => {
                warn!(error = %e, "could not fetch video title, using video ID");
                video_id.to_string()
            }
        }
    }
}
