//! # Loaders Module
//!
//! Load tracking for externally decoded scene assets.
//!
//! Decoding happens outside this crate; these types only answer the
//! question the frame loop cares about — has everything the scene
//! needs actually arrived — and feed a host loading overlay.

mod loading_manager;

pub use loading_manager::LoadingManager;

/// Loading state for one tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Currently loading.
    Loading,
    /// Successfully loaded.
    Loaded,
    /// Failed to load; the scene proceeds without it.
    Failed,
}

/// Snapshot of overall loading progress, e.g. for a host overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    /// Number of assets that arrived intact.
    pub loaded: usize,
    /// Number of assets that failed.
    pub failed: usize,
    /// Total number of tracked assets.
    pub total: usize,
}

impl LoadProgress {
    /// Completed fraction in 0.0 to 1.0. Nothing tracked counts as
    /// complete.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            (self.loaded + self.failed) as f32 / self.total as f32
        }
    }
}
