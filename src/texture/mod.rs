//! # Texture Module
//!
//! Texture resources behind the screen shader's sampler binding: the
//! GPU texture wrapper, a sampler, and the video feed state machine
//! that decides whether a live stream or a static image plays.

mod sampler;
mod texture2d;
mod video_feed;

pub use sampler::Sampler;
pub use texture2d::Texture2D;
pub use video_feed::{FeedState, VideoFeed};
