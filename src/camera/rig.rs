//! Pointer-follow camera rig with eased motion and focus transitions.

use crate::math::{Vector2, Vector3};

/// An in-flight look-at transition between two focus points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTransition {
    /// Aim point the transition started from.
    pub from: Vector3,
    /// Focus point the transition is heading to.
    pub to: Vector3,
    /// Remaining blend weight in (0, 1]; 1 aims fully at `from`.
    pub weight: f32,
}

/// Eases the camera toward a pointer-derived target and aims it at a
/// focus point, optionally blending between two foci after a toggle.
///
/// The position update is a contraction: each tick covers a fixed
/// fraction of the remaining distance, so the camera approaches the
/// target asymptotically and never overshoots or lands on it exactly.
pub struct CameraRig {
    position: Vector3,
    /// Fraction of the remaining distance covered per tick, in (0, 1).
    gain: f32,
    /// Constant added to the vertical follow target.
    height_offset: f32,
    /// Depth the camera holds (the target's fixed z).
    depth: f32,
    /// Mirror the horizontal offset into the target.
    mirror_x: bool,
    primary_focus: Vector3,
    secondary_focus: Vector3,
    aimed_at_secondary: bool,
    transition: Option<FocusTransition>,
    /// Per-tick fraction removed from the blend weight.
    transition_density: f32,
    controls_enabled: bool,
}

impl CameraRig {
    /// Default easing gain: one twentieth of the remaining distance per
    /// tick.
    pub const DEFAULT_GAIN: f32 = 0.05;
    /// Default vertical offset added to the follow target.
    pub const DEFAULT_HEIGHT_OFFSET: f32 = 2.0;
    /// Per-tick decay fraction for focus transitions.
    pub const TRANSITION_DENSITY: f32 = 0.2;
    /// Blend weights below this settle the transition.
    pub const SETTLE_EPSILON: f32 = 0.01;

    /// Create a rig at `position` aiming at `focus`. The target depth
    /// is taken from the starting position.
    pub fn new(position: Vector3, focus: Vector3) -> Self {
        Self {
            position,
            gain: Self::DEFAULT_GAIN,
            height_offset: Self::DEFAULT_HEIGHT_OFFSET,
            depth: position.z,
            mirror_x: false,
            primary_focus: focus,
            secondary_focus: focus,
            aimed_at_secondary: false,
            transition: None,
            transition_density: Self::TRANSITION_DENSITY,
            controls_enabled: true,
        }
    }

    /// Set the alternate focus reached by [`CameraRig::toggle_focus`].
    pub fn set_secondary_focus(&mut self, focus: Vector3) {
        self.secondary_focus = focus;
    }

    /// Set the easing gain. Expects 0 < gain < 1.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Set the vertical offset added to the follow target.
    pub fn set_height_offset(&mut self, offset: f32) {
        self.height_offset = offset;
    }

    /// Mirror the horizontal pointer offset into the follow target.
    pub fn set_mirror_x(&mut self, mirror: bool) {
        self.mirror_x = mirror;
    }

    /// Flip the controls flag and start a transition toward the other
    /// focus with a fresh blend weight.
    pub fn toggle_focus(&mut self) {
        self.controls_enabled = !self.controls_enabled;
        let from = self.aim();
        self.aimed_at_secondary = !self.aimed_at_secondary;
        self.transition = Some(FocusTransition {
            from,
            to: self.current_focus(),
            weight: 1.0,
        });
    }

    fn current_focus(&self) -> Vector3 {
        if self.aimed_at_secondary {
            self.secondary_focus
        } else {
            self.primary_focus
        }
    }

    /// Current aim point: the active focus, or the weighted blend while
    /// a transition is in flight.
    pub fn aim(&self) -> Vector3 {
        match &self.transition {
            Some(t) => t.to.lerp(&t.from, t.weight),
            None => self.current_focus(),
        }
    }

    /// The position the rig eases toward for a given pointer offset.
    pub fn follow_target(&self, offset: Vector2) -> Vector3 {
        let x = if self.mirror_x { -offset.x } else { offset.x };
        Vector3::new(x, -offset.y + self.height_offset, self.depth)
    }

    /// One tick: ease the position toward the pointer-derived target
    /// and decay any in-flight transition. Returns the aim point for
    /// this frame.
    pub fn update(&mut self, offset: Vector2) -> Vector3 {
        let target = self.follow_target(offset);
        self.position = self.position.ease_toward(&target, self.gain);

        if let Some(mut t) = self.transition.take() {
            t.weight -= t.weight * self.transition_density;
            if t.weight >= Self::SETTLE_EPSILON {
                self.transition = Some(t);
            }
        }

        self.aim()
    }

    /// Current eased position.
    #[inline]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Whether a focus transition is still in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight transition, if any.
    #[inline]
    pub fn transition(&self) -> Option<&FocusTransition> {
        self.transition.as_ref()
    }

    /// Whether pointer-driven controls are enabled.
    #[inline]
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_rig() -> CameraRig {
        // rig with no vertical bias so targets equal the raw offset
        let mut rig = CameraRig::new(Vector3::new(10.0, 0.0, 0.0), Vector3::ZERO);
        rig.set_height_offset(0.0);
        rig
    }

    #[test]
    fn test_easing_single_step() {
        let mut rig = bare_rig();
        rig.update(Vector2::ZERO);
        assert_eq!(rig.position().x, 9.5);
    }

    #[test]
    fn test_easing_after_ten_ticks() {
        let mut rig = bare_rig();
        for _ in 0..10 {
            rig.update(Vector2::ZERO);
        }
        assert!((rig.position().x - 5.9874).abs() < 1e-3);
    }

    #[test]
    fn test_easing_never_overshoots() {
        let mut rig = bare_rig();
        let mut previous = rig.position().x;
        for _ in 0..200 {
            rig.update(Vector2::ZERO);
            let x = rig.position().x;
            assert!(x <= previous);
            assert!(x >= 0.0);
            previous = x;
        }
    }

    #[test]
    fn test_update_is_deterministic_without_pointer_events() {
        let mut a = bare_rig();
        let mut b = bare_rig();
        for _ in 0..7 {
            a.update(Vector2::ZERO);
            b.update(Vector2::ZERO);
        }
        assert_eq!(a.position(), b.position());
        assert_eq!(a.aim(), b.aim());
    }

    #[test]
    fn test_follow_target_derivation() {
        let mut rig = CameraRig::new(Vector3::new(0.0, 0.0, 30.0), Vector3::ZERO);
        let target = rig.follow_target(Vector2::new(3.0, -6.0));
        // y flips sign and gains the height offset, z holds the depth
        assert_eq!(target, Vector3::new(3.0, 8.0, 30.0));

        rig.set_mirror_x(true);
        let mirrored = rig.follow_target(Vector2::new(3.0, -6.0));
        assert_eq!(mirrored.x, -3.0);
    }

    #[test]
    fn test_toggle_starts_transition_and_flips_controls() {
        let mut rig = CameraRig::new(Vector3::ZERO, Vector3::new(0.0, 5.0, 5.0));
        rig.set_secondary_focus(Vector3::new(6.0, 2.0, -6.0));
        assert!(rig.controls_enabled());
        assert!(!rig.is_transitioning());

        rig.toggle_focus();
        assert!(!rig.controls_enabled());
        assert!(rig.is_transitioning());
        // a fresh transition still aims at the starting focus
        assert!(rig.aim().approx_eq(&Vector3::new(0.0, 5.0, 5.0), 1e-6));
    }

    #[test]
    fn test_blend_weight_decays_geometrically() {
        let mut rig = CameraRig::new(Vector3::ZERO, Vector3::new(0.0, 5.0, 5.0));
        rig.set_secondary_focus(Vector3::new(6.0, 2.0, -6.0));
        rig.toggle_focus();

        rig.update(Vector2::ZERO);
        let weight = rig.transition().unwrap().weight;
        assert!((weight - 0.8).abs() < 1e-6);

        for _ in 0..4 {
            rig.update(Vector2::ZERO);
        }
        let weight = rig.transition().unwrap().weight;
        assert!((weight - 0.32768).abs() < 1e-4);
    }

    #[test]
    fn test_blend_weight_stays_positive_until_settled() {
        let mut rig = CameraRig::new(Vector3::ZERO, Vector3::new(0.0, 5.0, 5.0));
        rig.set_secondary_focus(Vector3::new(6.0, 2.0, -6.0));
        rig.toggle_focus();

        let mut previous = 1.0 + 1e-6;
        while let Some(t) = rig.transition() {
            let weight = t.weight;
            assert!(weight > 0.0);
            assert!(weight < previous);
            previous = weight;
            rig.update(Vector2::ZERO);
        }
        // settled below the epsilon threshold onto the new focus
        assert!(rig.aim().approx_eq(&Vector3::new(6.0, 2.0, -6.0), 1e-6));
    }

    #[test]
    fn test_toggle_twice_returns_to_primary() {
        let mut rig = CameraRig::new(Vector3::ZERO, Vector3::new(0.0, 5.0, 5.0));
        rig.set_secondary_focus(Vector3::new(6.0, 2.0, -6.0));

        rig.toggle_focus();
        for _ in 0..40 {
            rig.update(Vector2::ZERO);
        }
        assert!(!rig.is_transitioning());

        rig.toggle_focus();
        for _ in 0..40 {
            rig.update(Vector2::ZERO);
        }
        assert!(rig.controls_enabled());
        assert!(rig.aim().approx_eq(&Vector3::new(0.0, 5.0, 5.0), 1e-6));
    }
}
