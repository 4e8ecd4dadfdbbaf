//! TOML config file under the user's config directory

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// `<config dir>/yt-summarize/config.toml`, falling back to `~/.config`
/// and finally the working directory when no home is known.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_default();
    base.join("yt-summarize").join("config.toml")
}

fn decode(text: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn encode(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
}

fn write_error(e: std::io::Error) -> ConfigError {
    ConfigError::WriteError(e.to_string())
}

/// Config store backed by a single TOML file
pub struct XdgConfigStore {
    file: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self::with_path(default_config_path())
    }

    pub fn with_path(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// Sibling file that a save writes before renaming over the real one
    fn staging_file(&self) -> PathBuf {
        let mut name = self.file.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.file.with_file_name(name)
    }

    async fn ensure_parent(&self) -> Result<(), ConfigError> {
        match self.file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => fs::create_dir_all(dir).await.map_err(write_error),
            None => Ok(()),
        }
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.file).await {
            Ok(text) => decode(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file.display(), "config file absent, using defaults");
                Ok(AppConfig::empty())
            }
            Err(e) => Err(ConfigError::ReadError(format!(
                "{}: {}",
                self.file.display(),
                e
            ))),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let text = encode(config)?;
        self.ensure_parent().await?;

        // Readers never see a half-written file
        let staging = self.staging_file();
        fs::write(&staging, text).await.map_err(write_error)?;
        if let Err(e) = fs::rename(&staging, &self.file).await {
            let _ = fs::remove_file(&staging).await;
            return Err(write_error(e));
        }

        debug!(path = %self.file.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.file.clone()
    }

    fn exists(&self) -> bool {
        self.file.is_file()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        let text = encode(&AppConfig::defaults())?;
        self.ensure_parent().await?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.file)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    ConfigError::AlreadyExists(self.file.display().to_string())
                }
                _ => write_error(e),
            })?;

        file.write_all(text.as_bytes()).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ObsidianConfig;

    fn store_in(dir: &tempfile::TempDir, relative: &str) -> XdgConfigStore {
        XdgConfigStore::with_path(dir.path().join(relative))
    }

    #[test]
    fn default_location_ends_in_app_dir() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("yt-summarize/config.toml"));
    }

    #[test]
    fn staging_file_sits_next_to_config() {
        let store = XdgConfigStore::with_path("/etc/yt/config.toml");
        assert_eq!(store.staging_file(), PathBuf::from("/etc/yt/config.toml.tmp"));
    }

    #[test]
    fn decodes_obsidian_table() {
        let config = decode(
            r#"
api_key = "sk-ant-test"
language = "de"
save = false

[obsidian]
api_key = "vault-key"
port = 27123
folder = "inbox/videos"
"#,
        )
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(config.language_or_default(), "de");
        assert_eq!(config.save, Some(false));
        assert_eq!(config.obsidian_api_key(), Some("vault-key"));
        assert_eq!(config.obsidian_port_or_default(), 27123);
        assert_eq!(config.obsidian_folder_or_default(), "inbox/videos");
    }

    #[test]
    fn decode_rejects_wrong_types() {
        assert!(matches!(
            decode("save = \"maybe\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn absent_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "missing/config.toml");

        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "config.toml");
        std::fs::create_dir(store.path()).unwrap();

        assert!(matches!(store.load().await, Err(ConfigError::ReadError(_))));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn save_creates_dirs_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "nested/config.toml");

        let config = AppConfig {
            language: Some("fr".to_string()),
            obsidian: Some(ObsidianConfig {
                folder: Some("notes".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        assert!(store.exists());
        assert!(!store.staging_file().exists());
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "config.toml");

        store.save(&AppConfig::defaults()).await.unwrap();
        let smaller = AppConfig {
            save: Some(false),
            ..Default::default()
        };
        store.save(&smaller).await.unwrap();

        assert_eq!(store.load().await.unwrap(), smaller);
    }

    #[tokio::test]
    async fn init_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "yt-summarize/config.toml");

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        std::fs::write(store.path(), "language = \"ja\"\n").unwrap();
        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
        assert_eq!(store.load().await.unwrap().language_or_default(), "ja");
    }
}
