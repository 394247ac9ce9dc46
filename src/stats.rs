//! Per-run statistics
//!
//! Tracks attempts and progress across retries of a single level. Coin counts
//! are per attempt; the host credits them on completion.

use serde::{Deserialize, Serialize};

/// Statistics for the current level session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Attempts including the current one
    pub attempts: u32,
    /// Fraction of the level scrolled this attempt, in `[0, 1]`
    pub progress: f32,
    /// Best progress across all attempts
    pub best_progress: f32,
    /// Coins collected this attempt
    pub coins_collected: u32,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            attempts: 1,
            progress: 0.0,
            best_progress: 0.0,
            coins_collected: 0,
        }
    }
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scrolled fraction of the level (clamped to `[0, 1]`)
    pub fn record_progress(&mut self, fraction: f32) {
        self.progress = fraction.clamp(0.0, 1.0);
        if self.progress > self.best_progress {
            self.best_progress = self.progress;
        }
    }

    /// Progress as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.progress * 100.0).floor() as u32
    }

    /// Begin another attempt, keeping the best progress
    pub fn start_attempt(&mut self) {
        self.attempts += 1;
        self.progress = 0.0;
        self.coins_collected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let stats = RunStats::new();
        assert_eq!(stats.attempts, 1);
        assert_eq!(stats.progress, 0.0);
        assert_eq!(stats.coins_collected, 0);
    }

    #[test]
    fn test_progress_clamped() {
        let mut stats = RunStats::new();
        stats.record_progress(1.4);
        assert_eq!(stats.progress, 1.0);
        assert_eq!(stats.percent(), 100);
        stats.record_progress(-0.2);
        assert_eq!(stats.progress, 0.0);
    }

    #[test]
    fn test_best_progress_survives_retry() {
        let mut stats = RunStats::new();
        stats.record_progress(0.45);
        stats.coins_collected = 3;
        stats.start_attempt();
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.progress, 0.0);
        assert_eq!(stats.coins_collected, 0);
        assert_eq!(stats.best_progress, 0.45);

        stats.record_progress(0.2);
        assert_eq!(stats.best_progress, 0.45);
        assert_eq!(stats.percent(), 20);
    }
}
