//! Video reference domain module

mod video_id;

pub use video_id::{VideoId, VIDEO_ID_LEN};
