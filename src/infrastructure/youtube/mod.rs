//! YouTube adapters
//!
//! Captions come from the InnerTube player endpoint and the timed text
//! service; titles come from oEmbed.

mod client;
mod player;
mod timedtext;

pub use client::YouTubeClient;
