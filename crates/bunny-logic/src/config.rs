//! Tunable decay parameters.

use serde::{Deserialize, Serialize};

/// Default minimum elapsed seconds before decay applies.
pub const DEFAULT_GRACE_SECONDS: f64 = 10.0;

/// Length of one decay tick in seconds.
pub const DEFAULT_TICK_SECONDS: f64 = 10.0;

/// Per-tick drift of each stat. Signs are fixed by [`crate::stats::Stats::decay`]:
/// hunger and energy rise, happiness and cleanliness fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRates {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    /// Idle recovery.
    pub energy: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 1.2,
            happiness: 0.4,
            cleanliness: 0.3,
            energy: 0.3,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BunnyConfig {
    /// Calls closer together than this do not decay the bunny.
    pub decay_grace_seconds: f64,
    /// Elapsed time is scaled into ticks of this length.
    pub tick_seconds: f64,
    pub rates: DecayRates,
}

impl Default for BunnyConfig {
    fn default() -> Self {
        Self {
            decay_grace_seconds: DEFAULT_GRACE_SECONDS,
            tick_seconds: DEFAULT_TICK_SECONDS,
            rates: DecayRates::default(),
        }
    }
}

impl BunnyConfig {
    /// Override the grace period. Negative values are treated as zero.
    pub fn with_grace_seconds(mut self, seconds: f64) -> Self {
        self.decay_grace_seconds = seconds.max(0.0);
        self
    }

    /// Convert elapsed seconds into decay ticks.
    pub fn ticks(&self, elapsed_seconds: f64) -> f64 {
        if self.tick_seconds <= 0.0 {
            0.0
        } else {
            elapsed_seconds / self.tick_seconds
        }
    }
}
