//! Obsidian Local REST API note store adapter

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ports::{NoteStore, PublishError};
use crate::domain::note::NotePath;

/// The plugin only listens on the loopback interface
const LOCAL_HOST: &str = "127.0.0.1";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Writes notes into a vault through the Local REST API plugin
pub struct ObsidianNoteStore {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl ObsidianNoteStore {
    /// Create a store for the plugin's HTTPS port on localhost.
    /// The plugin serves a self-signed certificate, so certificate checks
    /// are disabled for this client.
    pub fn new(api_key: Option<String>, port: u16) -> Self {
        Self::with_base_url(api_key, format!("https://{}:{}", LOCAL_HOST, port))
    }

    /// Create a store that talks to a different host
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Build the vault URL for a note
    fn note_url(&self, path: &NotePath) -> String {
        format!("{}/vault/{}", self.base_url, path.url_encoded())
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[async_trait]
impl NoteStore for ObsidianNoteStore {
    async fn put(&self, path: &NotePath, content: &str) -> Result<(), PublishError> {
        let api_key = self.api_key.as_deref().ok_or(PublishError::MissingApiKey)?;
        let url = self.note_url(path);

        debug!(url = %url, "writing note to vault");

        let response = self
            .client
            .put(&url)
            .bearer_auth(api_key)
            .header(reqwest::header::CONTENT_TYPE, "text/markdown")
            .body(content.to_string())
            .send()
            .await
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PublishError::Unauthorized(status.as_u16()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        Ok(())
    }
}
