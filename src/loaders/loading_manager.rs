//! Tracks the model and texture loads the host performs for the scene.

use super::{LoadProgress, LoadState};
use std::collections::HashMap;

/// Tracks in-flight asset loads so the frame loop can gate scene
/// placement — cloned model instances are only placed and the loading
/// overlay only hidden once every tracked load has settled.
pub struct LoadingManager {
    /// Tracked assets by URL (or any stable key).
    items: HashMap<String, LoadState>,
    /// Errors encountered.
    errors: Vec<String>,
}

impl Default for LoadingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingManager {
    /// Create a new loading manager.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Begin tracking an asset.
    pub fn item_start(&mut self, url: impl Into<String>) {
        self.items.insert(url.into(), LoadState::Loading);
    }

    /// Mark an asset as arrived.
    pub fn item_end(&mut self, url: &str) {
        if let Some(state) = self.items.get_mut(url) {
            *state = LoadState::Loaded;
        }
    }

    /// Mark an asset as failed.
    pub fn item_error(&mut self, url: &str, error: impl Into<String>) {
        if let Some(state) = self.items.get_mut(url) {
            *state = LoadState::Failed;
            let error = error.into();
            log::warn!("asset load failed for {url}: {error}");
            self.errors.push(format!("{url}: {error}"));
        }
    }

    /// True once nothing is still in flight. An empty manager is
    /// settled — there is nothing to wait for.
    pub fn is_settled(&self) -> bool {
        !self.items.values().any(|state| *state == LoadState::Loading)
    }

    /// True when every tracked asset arrived intact.
    pub fn is_loaded(&self) -> bool {
        self.is_settled() && self.errors.is_empty()
    }

    /// Check if any errors occurred.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get all errors.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get progress information.
    pub fn progress(&self) -> LoadProgress {
        let mut progress = LoadProgress {
            loaded: 0,
            failed: 0,
            total: self.items.len(),
        };
        for state in self.items.values() {
            match state {
                LoadState::Loaded => progress.loaded += 1,
                LoadState::Failed => progress.failed += 1,
                LoadState::Loading => {}
            }
        }
        progress
    }

    /// Completed fraction in 0.0 to 1.0.
    pub fn fraction(&self) -> f32 {
        self.progress().fraction()
    }

    /// Forget all tracked assets.
    pub fn reset(&mut self) {
        self.items.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manager_is_settled() {
        let manager = LoadingManager::new();
        assert!(manager.is_settled());
        assert!(manager.is_loaded());
        assert_eq!(manager.fraction(), 1.0);
    }

    #[test]
    fn test_in_flight_load_blocks_settling() {
        let mut manager = LoadingManager::new();
        manager.item_start("models/tv.fbx");
        manager.item_start("models/screen.fbx");
        assert!(!manager.is_settled());
        assert_eq!(manager.fraction(), 0.0);

        manager.item_end("models/tv.fbx");
        assert!(!manager.is_settled());
        assert_eq!(manager.fraction(), 0.5);

        manager.item_end("models/screen.fbx");
        assert!(manager.is_settled());
        assert!(manager.is_loaded());
    }

    #[test]
    fn test_failed_load_settles_with_errors() {
        let mut manager = LoadingManager::new();
        manager.item_start("textures/tv_color.tga");
        manager.item_error("textures/tv_color.tga", "404");
        assert!(manager.is_settled());
        assert!(!manager.is_loaded());
        assert!(manager.has_errors());
        assert_eq!(manager.errors().len(), 1);
    }

    #[test]
    fn test_unknown_urls_are_ignored() {
        let mut manager = LoadingManager::new();
        manager.item_end("never/started");
        manager.item_error("never/started", "nope");
        assert!(manager.is_loaded());
        assert!(!manager.has_errors());
    }
}
