//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::video::VideoId;

/// yt-summarize - Summarize YouTube videos with Claude
#[derive(Parser, Debug)]
#[command(name = "yt-summarize")]
#[command(version)]
#[command(about = "Summarize a YouTube video using its transcript and Claude")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// YouTube video URL or video ID
    #[arg(value_name = "VIDEO", required = true)]
    pub video: Option<String>,

    /// Skip sending the summary to Obsidian
    #[arg(long)]
    pub no_obsidian: bool,

    /// Preferred caption language (e.g. en, de, pt-BR)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub language: Option<String>,

    /// Vault folder for the note (default: transcripts/videos)
    #[arg(long, value_name = "PATH", env = "OBSIDIAN_SUMMARY_FOLDER")]
    pub folder: Option<String>,

    /// Obsidian Local REST API port (default: 27124)
    #[arg(
        long,
        value_name = "PORT",
        env = "OBSIDIAN_REST_PORT",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: Option<u16>,

    /// Print debug logs to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for one summarize run
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub video_id: VideoId,
    pub language: String,
    pub publish: bool,
    pub folder: String,
    pub api_key: Option<String>,
    pub obsidian_api_key: Option<String>,
    pub obsidian_port: u16,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "language",
    "save",
    "obsidian.api_key",
    "obsidian.port",
    "obsidian.folder",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
