//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like YouTube, the Anthropic API
//! and the Obsidian Local REST API.

pub mod config;
pub mod obsidian;
pub mod summarization;
pub mod youtube;

// Re-export adapters
pub use config::XdgConfigStore;
pub use obsidian::ObsidianNoteStore;
pub use summarization::AnthropicSummarizer;
pub use youtube::YouTubeClient;
