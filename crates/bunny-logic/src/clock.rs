//! Wall-clock abstraction.
//!
//! The engine never reads the system clock directly. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`] to move time forward on demand.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 2024-01-01T00:00:00Z, the instant a default [`ManualClock`] starts at.
const MANUAL_EPOCH_MICROS: i64 = 1_704_067_200_000_000;

/// Hand-driven clock. Clones share the same instant, so a test can keep one
/// handle while the engine owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    micros: Arc<AtomicI64>,
}

impl ManualClock {
    /// Move time forward (or backward, for negative values) by `seconds`.
    pub fn advance(&self, seconds: f64) {
        let delta = (seconds * 1_000_000.0).round() as i64;
        self.micros.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            micros: Arc::new(AtomicI64::new(MANUAL_EPOCH_MICROS)),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_micros(self.micros.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }
}
