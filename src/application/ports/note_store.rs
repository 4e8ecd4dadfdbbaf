//! Note storage port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::note::NotePath;

/// Errors from writing a note to the vault
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    #[error("Missing Obsidian API key. Set OBSIDIAN_REST_API_KEY or run 'yt-summarize config set obsidian.api_key <key>'")]
    MissingApiKey,

    #[error("Obsidian rejected the API key (HTTP {0})")]
    Unauthorized(u16),

    #[error("Obsidian returned HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Could not reach Obsidian: {0}")]
    RequestFailed(String),
}

/// Port for persisting notes
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Create or replace the note at `path` with `content`.
    async fn put(&self, path: &NotePath, content: &str) -> Result<(), PublishError>;
}
