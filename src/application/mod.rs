//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod summarize_video;

// Re-export use cases
pub use summarize_video::{
    PublishOutcome, SummarizeCallbacks, SummarizeError, SummarizeInput, SummarizeOutput,
    SummarizeVideoUseCase,
};
