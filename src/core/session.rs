//! Session context owning the demo's per-frame state.

use super::{Settings, Viewport};
use crate::camera::{CameraRig, PerspectiveCamera};
use crate::input::PointerSampler;
use crate::loaders::LoadingManager;
use crate::math::{Matrix4, Vector3};
use crate::screen::ScreenUniforms;
use crate::texture::FeedState;

/// Everything one tick produces for the external renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Uniform block staged for the screen shader.
    pub uniforms: ScreenUniforms,
    /// Eased camera position after this tick.
    pub camera_position: Vector3,
    /// Point the camera is aimed at after this tick.
    pub camera_aim: Vector3,
    /// Whether every tracked asset load has settled. Placing cloned
    /// scene instances and hiding the loading overlay wait on this.
    pub scene_ready: bool,
}

/// Owns all mutable per-session state: the pointer offset, the camera
/// rig, panel settings, the feed status, and the staged uniform block.
///
/// Event handlers write into the session as notifications arrive; the
/// frame loop reads it exactly once per tick. Both run on one logical
/// thread, so a tick always sees the last pointer write that preceded
/// it — rapid events overwrite each other without queuing.
pub struct Session {
    viewport: Viewport,
    pointer: PointerSampler,
    rig: CameraRig,
    camera: PerspectiveCamera,
    settings: Settings,
    loading: LoadingManager,
    feed: FeedState,
    feed_aspect: f32,
    /// Uniform writes stay disabled until the feed resolves one way or
    /// the other.
    uniforms_update: bool,
    parallax_scale: f32,
    uniforms: ScreenUniforms,
}

impl Session {
    /// Camera field of view in degrees.
    pub const CAMERA_FOV: f32 = 40.0;
    /// Depth the camera rig holds.
    pub const CAMERA_DEPTH: f32 = 30.0;
    /// Focus point the camera settles on by default.
    pub const DEFAULT_FOCUS: Vector3 = Vector3::new(0.0, 5.0, 5.0);
    /// Horizontal parallax scale applied to the pointer offset while a
    /// live feed drives the screen.
    pub const PARALLAX_SCALE: f32 = 0.02;

    /// Create a session for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        let camera =
            PerspectiveCamera::new(Self::CAMERA_FOV, viewport.aspect_ratio(), 1.0, 1000.0);
        let rig = CameraRig::new(
            Vector3::new(0.0, 0.0, Self::CAMERA_DEPTH),
            Self::DEFAULT_FOCUS,
        );

        Self {
            viewport,
            pointer: PointerSampler::new(),
            rig,
            camera,
            settings: Settings::new(),
            loading: LoadingManager::new(),
            feed: FeedState::Pending,
            feed_aspect: 1.0,
            uniforms_update: false,
            parallax_scale: Self::PARALLAX_SCALE,
            uniforms: ScreenUniforms::new(),
        }
    }

    // --- event side -----------------------------------------------------

    /// Feed a pointer-move notification into the sampler.
    pub fn pointer_moved(&mut self, event_x: f32, event_y: f32) {
        self.pointer.pointer_moved(event_x, event_y, &self.viewport);
    }

    /// Apply a resize notification: viewport and projection aspect.
    pub fn resized(&mut self, width: u32, height: u32) {
        if self.viewport.resize(width, height) {
            self.camera.set_aspect(self.viewport.aspect_ratio());
        }
    }

    /// Toggle the camera between its two focus points.
    pub fn toggle_focus(&mut self) {
        self.rig.toggle_focus();
    }

    /// Update the panel's `progress` scalar.
    pub fn set_progress(&mut self, value: f32) {
        self.settings.set_progress(value);
    }

    /// Record the feed acquisition outcome. Either outcome enables
    /// uniform updates; while the outcome is pending they stay frozen.
    pub fn feed_resolved(&mut self, state: FeedState) {
        self.feed = state;
        self.uniforms_update = state != FeedState::Pending;
    }

    /// Record the feed texture's aspect (height / width) for the
    /// resolution cover factors.
    pub fn set_feed_aspect(&mut self, aspect: f32) {
        self.feed_aspect = aspect;
    }

    // --- frame side -----------------------------------------------------

    /// Advance one tick. Deterministic given the stored state and
    /// `elapsed_ms`: with no intervening events, consecutive calls
    /// differ only by the easing step.
    pub fn advance(&mut self, elapsed_ms: f64) -> FrameState {
        let offset = self.pointer.offset();

        let aim = self.rig.update(offset);
        self.camera.set_position(self.rig.position());
        self.camera.look_at(aim);

        self.uniforms
            .set_resolution(self.viewport.resolution_vector(self.feed_aspect));
        if self.uniforms_update {
            if self.feed == FeedState::Live {
                // live feed: time and progress hold their last values,
                // the pointer drives the parallax offset instead
                self.uniforms.offset = offset.x * self.parallax_scale;
                self.uniforms.set_is_video(true);
            } else {
                self.uniforms.time = elapsed_ms as f32;
                self.uniforms.progress = self.settings.progress();
                self.uniforms.set_is_video(false);
            }
        }

        FrameState {
            uniforms: self.uniforms,
            camera_position: self.rig.position(),
            camera_aim: aim,
            scene_ready: self.loading.is_settled(),
        }
    }

    /// Combined view-projection matrix for the current camera pose.
    pub fn view_projection(&mut self) -> Matrix4 {
        *self.camera.view_projection_matrix()
    }

    // --- accessors ------------------------------------------------------

    /// Current viewport.
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current panel settings.
    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The camera rig.
    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// The camera rig, mutably — for retuning gain, foci, or mirroring.
    #[inline]
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The perspective camera.
    #[inline]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The load gate for scene assets.
    #[inline]
    pub fn loading(&self) -> &LoadingManager {
        &self.loading
    }

    /// The load gate, mutably — the host reports load lifecycle events
    /// through this.
    #[inline]
    pub fn loading_mut(&mut self) -> &mut LoadingManager {
        &mut self.loading
    }

    /// Current feed acquisition state.
    #[inline]
    pub fn feed(&self) -> FeedState {
        self.feed
    }

    /// Whether uniform updates are enabled yet.
    #[inline]
    pub fn uniforms_enabled(&self) -> bool {
        self.uniforms_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    fn session() -> Session {
        Session::new(Viewport::new(800, 600))
    }

    #[test]
    fn test_uniforms_stay_frozen_while_feed_pending() {
        let mut session = session();
        session.set_progress(7.0);
        let frame = session.advance(1234.0);
        assert_eq!(frame.uniforms.time, 0.0);
        assert_eq!(frame.uniforms.progress, 0.0);
        assert!(!frame.uniforms.is_video());
    }

    #[test]
    fn test_static_path_stages_time_and_progress() {
        let mut session = session();
        session.feed_resolved(FeedState::Unavailable);
        session.set_progress(7.0);
        let frame = session.advance(1234.0);
        assert_eq!(frame.uniforms.time, 1234.0);
        assert_eq!(frame.uniforms.progress, 7.0);
        assert_eq!(frame.uniforms.offset, 0.0);
        assert!(!frame.uniforms.is_video());
    }

    #[test]
    fn test_live_path_freezes_time_and_drives_offset() {
        let mut session = session();
        session.feed_resolved(FeedState::Live);
        // pointer at the right edge, bottom: offset.x = 400 * 0.02 = 8
        session.pointer_moved(800.0, 600.0);
        let frame = session.advance(1234.0);
        assert_eq!(frame.uniforms.time, 0.0);
        assert_eq!(frame.uniforms.progress, 0.0);
        assert!((frame.uniforms.offset - 8.0 * Session::PARALLAX_SCALE).abs() < 1e-6);
        assert!(frame.uniforms.is_video());
    }

    #[test]
    fn test_advance_eases_camera_toward_pointer_target() {
        let mut session = session();
        session.pointer_moved(800.0, 600.0);
        let target = session.rig().follow_target(Vector2::new(8.0, 0.0));
        let before = session.rig().position();
        let frame = session.advance(16.0);
        let after = frame.camera_position;
        // moved toward the target without reaching it
        assert!(after.distance_to(&target) < before.distance_to(&target));
        assert!(after.distance_to(&target) > 0.0);
    }

    #[test]
    fn test_advance_is_idempotent_without_events() {
        let mut a = session();
        let mut b = session();
        a.feed_resolved(FeedState::Unavailable);
        b.feed_resolved(FeedState::Unavailable);
        for _ in 0..5 {
            let fa = a.advance(100.0);
            let fb = b.advance(100.0);
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn test_resolution_tracks_viewport_and_feed_aspect() {
        let mut session = Session::new(Viewport::new(200, 100));
        session.set_feed_aspect(1.0);
        let frame = session.advance(0.0);
        assert_eq!(frame.uniforms.resolution, [200.0, 100.0, 1.0, 0.5]);
    }

    #[test]
    fn test_scene_ready_waits_on_loads() {
        let mut session = session();
        assert!(session.advance(0.0).scene_ready);

        session.loading_mut().item_start("models/tv.fbx");
        assert!(!session.advance(16.0).scene_ready);

        session.loading_mut().item_end("models/tv.fbx");
        assert!(session.advance(32.0).scene_ready);
    }

    #[test]
    fn test_resized_updates_projection_aspect() {
        let mut session = session();
        session.resized(1600, 600);
        assert_eq!(session.camera().aspect, 1600.0 / 600.0);
        // degenerate sizes are ignored
        session.resized(0, 0);
        assert_eq!(session.viewport().width(), 1600);
    }
}
