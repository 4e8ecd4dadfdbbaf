//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ObsidianConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;

    let shown = if key.ends_with("api_key") {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a value and write it into the config
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    };

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "language" => {
            if !is_language_code(value) {
                return Err(invalid(
                    "Expected a language code such as 'en', 'de' or 'pt-BR'",
                ));
            }
            config.language = Some(value.to_string());
        }
        "save" => {
            config.save =
                Some(parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'"))?)
        }
        "obsidian.api_key" => obsidian_mut(config).api_key = Some(value.to_string()),
        "obsidian.port" => {
            let port = value
                .parse::<u16>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| invalid("Value must be a port number between 1 and 65535"))?;
            obsidian_mut(config).port = Some(port);
        }
        "obsidian.folder" => {
            let folder = value.trim().trim_matches('/');
            if folder.is_empty() {
                return Err(invalid("Folder must not be empty"));
            }
            obsidian_mut(config).folder = Some(folder.to_string());
        }
        _ => return Err(invalid("Unknown key")),
    }

    Ok(())
}

fn obsidian_mut(config: &mut AppConfig) -> &mut ObsidianConfig {
    config.obsidian.get_or_insert_with(ObsidianConfig::default)
}

/// Value shown by `config get` and `config list`; API keys are masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    let obsidian = config.obsidian.as_ref();

    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "language" => config.language.clone(),
        "save" => config.save.map(|b| b.to_string()),
        "obsidian.api_key" => obsidian
            .and_then(|o| o.api_key.as_deref())
            .map(mask_api_key),
        "obsidian.port" => obsidian.and_then(|o| o.port).map(|p| p.to_string()),
        "obsidian.folder" => obsidian.and_then(|o| o.folder.clone()),
        _ => None,
    }
}

fn is_language_code(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 16
        && value.starts_with(|c: char| c.is_ascii_alphabetic())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
