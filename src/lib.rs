//! yt-summarize - Summarize YouTube videos into Obsidian notes
//!
//! This crate fetches a video's caption transcript, asks Claude for a
//! structured summary, prints it as a markdown note, and optionally
//! writes the note into an Obsidian vault via the Local REST API plugin.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Video IDs, transcripts, prompts, notes, config and errors
//! - **Application**: The summarize use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (YouTube, Anthropic, Obsidian, config file)
//! - **CLI**: Argument parsing, output formatting and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
