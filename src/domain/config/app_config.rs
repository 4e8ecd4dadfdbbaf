//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default Obsidian Local REST API port (HTTPS)
pub const DEFAULT_OBSIDIAN_PORT: u16 = 27124;

/// Default vault folder for summary notes
pub const DEFAULT_OBSIDIAN_FOLDER: &str = "transcripts/videos";

/// Default caption language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Obsidian Local REST API settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsidianConfig {
    pub api_key: Option<String>,
    pub port: Option<u16>,
    pub folder: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Anthropic API key
    pub api_key: Option<String>,
    /// Preferred caption language
    pub language: Option<String>,
    /// Whether to publish to Obsidian
    pub save: Option<bool>,
    pub obsidian: Option<ObsidianConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            save: Some(true),
            obsidian: Some(ObsidianConfig {
                api_key: None,
                port: Some(DEFAULT_OBSIDIAN_PORT),
                folder: Some(DEFAULT_OBSIDIAN_FOLDER.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            language: other.language.or(self.language),
            save: other.save.or(self.save),
            obsidian: Self::merge_obsidian_config(self.obsidian, other.obsidian),
        }
    }

    fn merge_obsidian_config(
        base: Option<ObsidianConfig>,
        other: Option<ObsidianConfig>,
    ) -> Option<ObsidianConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(ObsidianConfig {
                api_key: o.api_key.or(b.api_key),
                port: o.port.or(b.port),
                folder: o.folder.or(b.folder),
            }),
        }
    }

    /// Get the caption language, or "en" if not set
    pub fn language_or_default(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Get the publish setting, or true if not set
    pub fn save_or_default(&self) -> bool {
        self.save.unwrap_or(true)
    }

    /// Get the Obsidian API key, if any
    pub fn obsidian_api_key(&self) -> Option<&str> {
        self.obsidian
            .as_ref()
            .and_then(|o| o.api_key.as_deref())
            .filter(|k| !k.is_empty())
    }

    /// Get the Obsidian port, or 27124 if not set
    pub fn obsidian_port_or_default(&self) -> u16 {
        self.obsidian
            .as_ref()
            .and_then(|o| o.port)
            .unwrap_or(DEFAULT_OBSIDIAN_PORT)
    }

    /// Get the vault folder, or "transcripts/videos" if not set
    pub fn obsidian_folder_or_default(&self) -> &str {
        self.obsidian
            .as_ref()
            .and_then(|o| o.folder.as_deref())
            .unwrap_or(DEFAULT_OBSIDIAN_FOLDER)
    }
}
