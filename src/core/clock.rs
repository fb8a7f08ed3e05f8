//! High-resolution clock for frame timing.

#[cfg(feature = "web")]
use web_sys::window;

#[cfg(not(feature = "web"))]
use std::time::Instant;

/// A monotonic clock measuring elapsed and delta time.
///
/// Only deltas matter to callers; the epoch is wherever the clock
/// started. The first timing query starts the clock implicitly.
pub struct Clock {
    /// Whether the clock is running.
    running: bool,
    /// Start time in seconds.
    start_time: f64,
    /// Time of the last update in seconds.
    old_time: f64,
    /// Total elapsed time while running.
    elapsed_time: f64,

    #[cfg(not(feature = "web"))]
    instant: Option<Instant>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a new clock (not started).
    pub fn new() -> Self {
        Self {
            running: false,
            start_time: 0.0,
            old_time: 0.0,
            elapsed_time: 0.0,
            #[cfg(not(feature = "web"))]
            instant: None,
        }
    }

    /// Create and start a new clock.
    pub fn start_new() -> Self {
        let mut clock = Self::new();
        clock.start();
        clock
    }

    /// Get the current time in seconds.
    fn now(&self) -> f64 {
        #[cfg(feature = "web")]
        {
            window()
                .and_then(|w| w.performance())
                .map(|p| p.now() / 1000.0)
                .unwrap_or(0.0)
        }

        #[cfg(not(feature = "web"))]
        {
            self.instant
                .map(|i| i.elapsed().as_secs_f64())
                .unwrap_or(0.0)
        }
    }

    /// Start the clock.
    pub fn start(&mut self) {
        #[cfg(not(feature = "web"))]
        {
            self.instant = Some(Instant::now());
        }

        self.start_time = self.now();
        self.old_time = self.start_time;
        self.elapsed_time = 0.0;
        self.running = true;
    }

    /// Get the elapsed time since the clock started (in seconds).
    pub fn get_elapsed_time(&mut self) -> f64 {
        self.get_delta();
        self.elapsed_time
    }

    /// Elapsed time in milliseconds, the unit the shader's `time`
    /// input expects.
    pub fn elapsed_millis(&mut self) -> f64 {
        self.get_elapsed_time() * 1000.0
    }

    /// Get the time since the last call to get_delta (in seconds).
    pub fn get_delta(&mut self) -> f64 {
        if !self.running {
            self.start();
            return 0.0;
        }

        let new_time = self.now();
        let diff = new_time - self.old_time;
        self.old_time = new_time;
        self.elapsed_time += diff;

        diff
    }

    /// Check if the clock is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_stopped() {
        let clock = Clock::new();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_first_query_starts_the_clock() {
        let mut clock = Clock::new();
        let delta = clock.get_delta();
        assert_eq!(delta, 0.0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_elapsed_millis_scales_seconds() {
        let mut clock = Clock::start_new();
        let seconds = clock.get_elapsed_time();
        let millis = clock.elapsed_millis();
        assert!(millis >= seconds * 1000.0);
    }
}
