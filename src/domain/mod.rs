//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod note;
pub mod summary;
pub mod transcript;
pub mod video;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use note::{Note, NotePath};
pub use summary::SummaryPrompt;
pub use transcript::{CaptionFragment, Transcript};
pub use video::VideoId;
