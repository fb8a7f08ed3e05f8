//! The repeating frame task driven by the host's refresh cadence.

use super::{Clock, FrameState, Session};

/// Repeating per-frame task: owns the session and a monotonic clock
/// and advances both once per host frame callback.
///
/// The host schedules ticks (requestAnimationFrame on the web); the
/// loop itself never terminates and has no cancellation concept — it
/// runs until the session is torn down with the process.
pub struct FrameLoop {
    session: Session,
    clock: Clock,
    frame: u64,
}

impl FrameLoop {
    /// Wrap a session. The clock starts on the first tick.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            clock: Clock::new(),
            frame: 0,
        }
    }

    /// Run one tick against the current clock reading.
    pub fn tick(&mut self) -> FrameState {
        let elapsed = self.clock.elapsed_millis();
        self.tick_at(elapsed)
    }

    /// Run one tick at an explicit elapsed time. The update is a pure
    /// function of the session state and this timestamp, which is what
    /// makes the loop testable without a real frame clock.
    pub fn tick_at(&mut self, elapsed_ms: f64) -> FrameState {
        self.frame += 1;
        self.session.advance(elapsed_ms)
    }

    /// Number of completed ticks.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The session being driven.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The session being driven, mutably — event handlers go through
    /// this.
    #[inline]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::texture::FeedState;

    #[test]
    fn test_tick_counts_frames() {
        let mut frame_loop = FrameLoop::new(Session::new(Viewport::new(800, 600)));
        assert_eq!(frame_loop.frame_count(), 0);
        frame_loop.tick_at(0.0);
        frame_loop.tick_at(16.0);
        assert_eq!(frame_loop.frame_count(), 2);
    }

    #[test]
    fn test_tick_at_forwards_time_to_uniforms() {
        let mut frame_loop = FrameLoop::new(Session::new(Viewport::new(800, 600)));
        frame_loop.session_mut().feed_resolved(FeedState::Unavailable);
        let frame = frame_loop.tick_at(250.0);
        assert_eq!(frame.uniforms.time, 250.0);
    }

    #[test]
    fn test_fixed_clock_leaves_only_the_easing_step() {
        let mut frame_loop = FrameLoop::new(Session::new(Viewport::new(800, 600)));
        frame_loop.session_mut().feed_resolved(FeedState::Unavailable);
        frame_loop.session_mut().pointer_moved(600.0, 300.0);

        let a = frame_loop.tick_at(100.0);
        let b = frame_loop.tick_at(100.0);
        // uniforms are identical; only the camera eased further
        assert_eq!(a.uniforms, b.uniforms);
        assert_ne!(a.camera_position, b.camera_position);
        assert_eq!(a.camera_aim, b.camera_aim);
    }
}
