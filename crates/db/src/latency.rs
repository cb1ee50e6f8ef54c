//! Simulated network latency applied to every repository call.

use std::time::Duration;

use rand::Rng;

/// Default lower bound of the simulated delay.
pub const DEFAULT_MIN_LATENCY_MS: u64 = 100;

/// Default upper bound of the simulated delay.
pub const DEFAULT_MAX_LATENCY_MS: u64 = 500;

/// Inclusive range from which each call's delay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyProfile {
    /// Build a profile; bounds given in the wrong order are swapped.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    /// No delay at all. Used by tests and tooling.
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    /// A fixed delay on every call.
    pub fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Pick the delay for one call.
    pub fn sample(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::rng().random_range(self.min_ms..=self.max_ms))
    }

    /// Yield to the runtime for one sampled delay. Other calls keep running.
    pub async fn simulate(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LATENCY_MS, DEFAULT_MAX_LATENCY_MS)
    }
}
