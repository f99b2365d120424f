//! Progress clock state
//!
//! The session flips the clock on transport transitions; the embedding
//! platform drives [`PlaybackSession::tick`](crate::PlaybackSession::tick)
//! at `interval()` while the clock reports running. Stopping the clock on
//! pause/stop/ended is what tears the platform timer down, so no interval
//! outlives the state that started it.

use std::time::Duration;

/// On/off state for the position sampling timer
#[derive(Debug, Clone)]
pub struct ProgressClock {
    interval: Duration,
    running: bool,
}

impl ProgressClock {
    /// Create a stopped clock with the given sampling interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
        }
    }

    /// Mark the clock running (idempotent)
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Mark the clock stopped (idempotent)
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the platform should be ticking the session
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sampling interval the platform timer should use
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let clock = ProgressClock::new(Duration::from_millis(500));
        assert!(!clock.is_running());
        assert_eq!(clock.interval(), Duration::from_millis(500));
    }

    #[test]
    fn start_stop_round_trip() {
        let mut clock = ProgressClock::new(Duration::from_millis(500));
        clock.start();
        assert!(clock.is_running());

        // Idempotent restart
        clock.start();
        assert!(clock.is_running());

        clock.stop();
        assert!(!clock.is_running());
    }
}
