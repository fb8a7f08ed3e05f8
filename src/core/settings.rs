//! Live-tunable settings exposed to a host GUI panel.

use serde::Serialize;

/// Descriptor for a single panel-tunable scalar: the metadata a host
/// GUI needs to build a slider for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SettingDescriptor {
    /// Uniform name the scalar feeds.
    pub name: &'static str,
    /// Lower bound of the slider.
    pub min: f32,
    /// Upper bound of the slider.
    pub max: f32,
    /// Slider step size.
    pub step: f32,
    /// Value the session starts with.
    pub initial: f32,
}

/// Panel settings, read once per frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    progress: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Slider metadata for the `progress` scalar.
    pub const PROGRESS: SettingDescriptor = SettingDescriptor {
        name: "progress",
        min: 1.0,
        max: 10.0,
        step: 0.5,
        initial: 5.0,
    };

    /// Create settings at their initial values.
    pub fn new() -> Self {
        Self {
            progress: Self::PROGRESS.initial,
        }
    }

    /// Current `progress` value.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set `progress`, clamped to the descriptor's range.
    pub fn set_progress(&mut self, value: f32) {
        self.progress = crate::math::clamp(value, Self::PROGRESS.min, Self::PROGRESS.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_initial() {
        assert_eq!(Settings::new().progress(), 5.0);
    }

    #[test]
    fn test_set_progress_clamps_to_range() {
        let mut settings = Settings::new();
        settings.set_progress(42.0);
        assert_eq!(settings.progress(), 10.0);
        settings.set_progress(-3.0);
        assert_eq!(settings.progress(), 1.0);
        settings.set_progress(7.5);
        assert_eq!(settings.progress(), 7.5);
    }

    #[test]
    fn test_descriptor_serializes_for_the_panel() {
        let json = serde_json::to_string(&Settings::PROGRESS).unwrap();
        assert!(json.contains("\"name\":\"progress\""));
        assert!(json.contains("\"step\":0.5"));
    }
}
