//! Live video feed acquisition with static-image fallback.

use super::Texture2D;

/// Acquisition state for the live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    /// Permission outcome not known yet; uniform updates stay frozen
    /// until it resolves.
    #[default]
    Pending,
    /// A live camera stream is feeding the screen texture.
    Live,
    /// Acquisition failed or is unsupported; the static fallback image
    /// plays instead.
    Unavailable,
}

/// The texture feeding the screen shader: a live camera stream when
/// the host acquired one, otherwise a static fallback image.
///
/// Denial is logged once and otherwise invisible — the demo simply
/// runs without video.
pub struct VideoFeed {
    state: FeedState,
    texture: Option<Texture2D>,
    denial_logged: bool,
}

impl Default for VideoFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoFeed {
    /// Create a feed awaiting the host's acquisition outcome.
    pub fn new() -> Self {
        Self {
            state: FeedState::Pending,
            texture: None,
            denial_logged: false,
        }
    }

    /// Current acquisition state.
    #[inline]
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Whether a live stream is playing.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.state == FeedState::Live
    }

    /// The host acquired a stream: allocate the frame texture at the
    /// stream's dimensions.
    pub fn grant(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, width: u32, height: u32) {
        let frame = vec![0u8; (width * height * 4) as usize];
        self.texture = Some(Texture2D::from_rgba8(
            device,
            queue,
            &frame,
            width,
            height,
            Some("Video Feed"),
        ));
        self.state = FeedState::Live;
        log::info!("video feed acquired ({}x{})", width, height);
    }

    /// The host was denied the stream (or has no capture support).
    /// A feed that already went live stays live.
    pub fn deny(&mut self, reason: &str) {
        if self.state == FeedState::Live {
            return;
        }
        self.state = FeedState::Unavailable;
        if !self.denial_logged {
            log::warn!("video feed unavailable, screen falls back to a static image: {reason}");
            self.denial_logged = true;
        }
    }

    /// Install the static image shown when no live feed exists.
    pub fn set_fallback_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[u8],
        width: u32,
        height: u32,
    ) {
        if self.state == FeedState::Live {
            return;
        }
        self.texture = Some(Texture2D::from_rgba8(
            device,
            queue,
            data,
            width,
            height,
            Some("Screen Fallback"),
        ));
    }

    /// Push a decoded camera frame into the feed texture. Ignored
    /// unless the feed is live.
    pub fn upload_frame(&self, queue: &wgpu::Queue, data: &[u8]) {
        if self.state != FeedState::Live {
            return;
        }
        if let Some(texture) = &self.texture {
            texture.write(queue, data);
        }
    }

    /// Aspect (height / width) of the current texture, 1.0 before any
    /// texture exists.
    pub fn aspect(&self) -> f32 {
        self.texture.as_ref().map(|t| t.aspect()).unwrap_or(1.0)
    }

    /// The current feed texture, if one exists.
    #[inline]
    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_starts_pending() {
        let feed = VideoFeed::new();
        assert_eq!(feed.state(), FeedState::Pending);
        assert!(!feed.is_live());
        assert!(feed.texture().is_none());
    }

    #[test]
    fn test_deny_resolves_to_unavailable() {
        let mut feed = VideoFeed::new();
        feed.deny("permission denied");
        assert_eq!(feed.state(), FeedState::Unavailable);
    }

    #[test]
    fn test_repeated_denials_are_stable() {
        let mut feed = VideoFeed::new();
        feed.deny("permission denied");
        feed.deny("permission denied again");
        assert_eq!(feed.state(), FeedState::Unavailable);
    }

    #[test]
    fn test_aspect_defaults_to_square() {
        assert_eq!(VideoFeed::new().aspect(), 1.0);
    }
}
