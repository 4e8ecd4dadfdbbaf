//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod note_store;
pub mod summarizer;
pub mod video_source;

// Re-export common types
pub use config::ConfigStore;
pub use note_store::{NoteStore, PublishError};
pub use summarizer::{SummarizationError, Summarizer};
pub use video_source::{FetchedCaptions, TranscriptError, VideoSource};
