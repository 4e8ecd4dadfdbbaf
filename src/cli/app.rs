//! Main app runner for one-shot mode

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, NoteStore, Summarizer, VideoSource};
use crate::application::{
    PublishOutcome, SummarizeCallbacks, SummarizeError, SummarizeInput, SummarizeOutput,
    SummarizeVideoUseCase,
};
use crate::domain::config::{AppConfig, ObsidianConfig};
use crate::domain::note::{Note, NotePath};
use crate::domain::video::VideoId;
use crate::infrastructure::{
    AnthropicSummarizer, ObsidianNoteStore, XdgConfigStore, YouTubeClient,
};

use super::args::SummarizeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables
pub const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_OBSIDIAN_API_KEY: &str = "OBSIDIAN_REST_API_KEY";

const MISSING_API_KEY: &str = "Missing API key. Set ANTHROPIC_API_KEY environment variable or run 'yt-summarize config set api_key <key>'";

/// Run one summarize pass: fetch, summarize, print, publish
pub async fn run_summarize(options: SummarizeOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    // Checked before any network call
    let api_key = match options.api_key.clone().filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => {
            presenter.error(MISSING_API_KEY);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let source = YouTubeClient::new();
    let summarizer = AnthropicSummarizer::new(api_key);
    let store = ObsidianNoteStore::new(options.obsidian_api_key.clone(), options.obsidian_port);

    let use_case = SummarizeVideoUseCase::new(source, summarizer, store);

    let input = SummarizeInput {
        video_id: options.video_id.clone(),
        language: options.language.clone(),
        publish: options.publish,
        folder: options.folder.clone(),
    };

    ExitCode::from(summarize_with(&use_case, input, &presenter).await)
}

/// Drive the use case with presenter callbacks and report the outcome.
/// Returns the process exit code.
pub async fn summarize_with<V, S, N>(
    use_case: &SummarizeVideoUseCase<V, S, N>,
    input: SummarizeInput,
    presenter: &Arc<Presenter>,
) -> u8
where
    V: VideoSource,
    S: Summarizer,
    N: NoteStore,
{
    let result = use_case.execute(input, callbacks(presenter)).await;
    report_outcome(&result, presenter)
}

/// Print the publish status or the fatal error and pick the exit code.
/// A failed publish still exits with success; the note was already printed.
pub fn report_outcome(
    result: &Result<SummarizeOutput, SummarizeError>,
    presenter: &Presenter,
) -> u8 {
    match result {
        Ok(output) => {
            match &output.publish {
                PublishOutcome::Saved(path) => {
                    presenter.success(&format!("Saved to Obsidian: {}", path));
                }
                PublishOutcome::Failed { path, error } => {
                    presenter.warn(&format!("Could not save {} to Obsidian: {}", path, error));
                }
                PublishOutcome::Skipped => debug!("publishing disabled"),
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.spinner_fail("Failed");
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

fn callbacks(presenter: &Arc<Presenter>) -> SummarizeCallbacks {
    let on_fetching = Arc::clone(presenter);
    let on_fetched = Arc::clone(presenter);
    let on_summarizing = Arc::clone(presenter);
    let on_ready = Arc::clone(presenter);
    let on_publishing = Arc::clone(presenter);

    SummarizeCallbacks {
        on_fetching_start: Some(Box::new(move |video_id: &VideoId| {
            on_fetching.start_spinner(&format!("Fetching transcript for {}...", video_id));
        })),
        on_transcript_fetched: Some(Box::new(move |title: &str, chars: usize| {
            on_fetched.spinner_success(&format!(
                "Transcript: {} ({})",
                title,
                on_fetched.format_chars(chars)
            ));
        })),
        on_summarizing_start: Some(Box::new(move || {
            on_summarizing.start_spinner("Summarizing with Claude...");
        })),
        on_note_ready: Some(Box::new(move |note: &Note| {
            on_ready.spinner_success("Summary ready");
            on_ready.output(note.render().trim_end());
        })),
        on_publishing_start: Some(Box::new(move |path: &NotePath| {
            on_publishing.info(&format!("Saving to Obsidian: {}", path));
        })),
    }
}

/// Read a non-empty environment variable
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Build the environment config layer for the secrets.
/// Folder and port arrive through clap's `env` bindings.
pub fn env_config() -> AppConfig {
    AppConfig {
        api_key: env_var(ENV_ANTHROPIC_API_KEY),
        obsidian: Some(ObsidianConfig {
            api_key: env_var(ENV_OBSIDIAN_API_KEY),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Resolve run options from the merged config
pub fn resolve_options(video_id: VideoId, config: &AppConfig) -> SummarizeOptions {
    SummarizeOptions {
        video_id,
        language: config.language_or_default().to_string(),
        publish: config.save_or_default(),
        folder: config.obsidian_folder_or_default().to_string(),
        api_key: config.api_key.clone(),
        obsidian_api_key: config.obsidian_api_key().map(str::to_string),
        obsidian_port: config.obsidian_port_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{PublishError, SummarizationError, TranscriptError};

    fn output(publish: PublishOutcome) -> SummarizeOutput {
        SummarizeOutput {
            note: Note::new(id(), "Title", "TLDR"),
            transcript_chars: 4,
            publish,
        }
    }

    fn path() -> NotePath {
        NotePath::new("transcripts/videos", &Note::new(id(), "Title", "TLDR"))
    }

    #[test]
    fn skipped_publish_exits_success() {
        let presenter = Presenter::new();
        assert_eq!(
            report_outcome(&Ok(output(PublishOutcome::Skipped)), &presenter),
            EXIT_SUCCESS
        );
    }

    #[test]
    fn saved_publish_exits_success() {
        let presenter = Presenter::new();
        assert_eq!(
            report_outcome(&Ok(output(PublishOutcome::Saved(path()))), &presenter),
            EXIT_SUCCESS
        );
    }

    #[test]
    fn failed_publish_still_exits_success() {
        let presenter = Presenter::new();
        let failed = PublishOutcome::Failed {
            path: path(),
            error: PublishError::Unauthorized(401),
        };
        assert_eq!(report_outcome(&Ok(output(failed)), &presenter), EXIT_SUCCESS);
    }

    #[test]
    fn fatal_errors_exit_with_error() {
        let presenter = Presenter::new();
        let transcript = Err(SummarizeError::Transcript(TranscriptError::CaptionsDisabled));
        let summary = Err(SummarizeError::Summarization(SummarizationError::InvalidApiKey));

        assert_eq!(report_outcome(&transcript, &presenter), EXIT_ERROR);
        assert_eq!(report_outcome(&summary, &presenter), EXIT_ERROR);
    }

    fn id() -> VideoId {
        "dQw4w9WgXcQ".parse().unwrap()
    }

    #[test]
    fn resolve_options_from_defaults() {
        let options = resolve_options(id(), &AppConfig::defaults());
        assert_eq!(options.language, "en");
        assert!(options.publish);
        assert_eq!(options.folder, "transcripts/videos");
        assert_eq!(options.obsidian_port, 27124);
        assert!(options.api_key.is_none());
        assert!(options.obsidian_api_key.is_none());
    }

    #[test]
    fn resolve_options_cli_overrides_file() {
        let file = AppConfig {
            language: Some("de".to_string()),
            obsidian: Some(ObsidianConfig {
                api_key: Some("vault".to_string()),
                port: Some(27123),
                folder: Some("inbox".to_string()),
            }),
            ..Default::default()
        };
        let cli = AppConfig {
            save: Some(false),
            obsidian: Some(ObsidianConfig {
                folder: Some("videos/2024".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = AppConfig::defaults().merge(file).merge(cli);
        let options = resolve_options(id(), &merged);

        assert_eq!(options.language, "de");
        assert!(!options.publish);
        assert_eq!(options.folder, "videos/2024");
        assert_eq!(options.obsidian_port, 27123);
        assert_eq!(options.obsidian_api_key.as_deref(), Some("vault"));
    }
}
