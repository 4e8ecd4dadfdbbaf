//! Transcript domain module

mod caption;

pub use caption::{caption_span_ms, join_fragments, CaptionFragment, Transcript};
