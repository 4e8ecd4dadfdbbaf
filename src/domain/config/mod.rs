//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, ObsidianConfig, DEFAULT_LANGUAGE, DEFAULT_OBSIDIAN_FOLDER, DEFAULT_OBSIDIAN_PORT,
};
