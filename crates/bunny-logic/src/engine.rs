//! The stateful bunny.
//!
//! Decay is lazy: nothing ticks in the background. Every public operation
//! first catches the stats up with the time elapsed since the last applied
//! decay, then applies its own effect, then reports a [`Snapshot`].
//!
//! Calls arriving within the grace period of the last applied decay skip
//! the catch-up entirely, so a burst of requests does not accumulate tiny
//! floating-point drifts. `last_update` only moves when decay is applied.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::actions::{clean_effect, Action, Food, PlayKind};
use crate::clock::{Clock, SystemClock};
use crate::config::BunnyConfig;
use crate::stats::Stats;

/// Number of fresh perfect streaks that reveals the easter bunny.
const EASTER_BUNNY_STREAKS: u32 = 2;

/// Everything a caller gets back from an operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub energy: f64,
    pub overall_health: f64,
    pub easter_bunny: bool,
}

impl Snapshot {
    pub fn stats(&self) -> Stats {
        Stats {
            hunger: self.hunger,
            happiness: self.happiness,
            cleanliness: self.cleanliness,
            energy: self.energy,
        }
    }
}

/// Edge-triggered counter for the perfect condition.
///
/// Counts transitions from not-perfect to perfect. Staying perfect across
/// several observations counts once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerfectTracker {
    count: u32,
    last: bool,
}

impl PerfectTracker {
    /// Record one observation. Returns true if this is a fresh entry into
    /// the perfect condition.
    pub fn observe(&mut self, perfect: bool) -> bool {
        let entered = perfect && !self.last;
        if entered {
            self.count = self.count.saturating_add(1);
        }
        self.last = perfect;
        entered
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn easter_bunny(&self) -> bool {
        self.count == EASTER_BUNNY_STREAKS
    }
}

pub struct BunnyEngine<C: Clock = SystemClock> {
    stats: Stats,
    last_update: DateTime<Utc>,
    perfect: PerfectTracker,
    config: BunnyConfig,
    clock: C,
}

impl BunnyEngine<SystemClock> {
    /// A fresh bunny on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BunnyEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BunnyEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(clock, BunnyConfig::default())
    }

    pub fn with_config(clock: C, config: BunnyConfig) -> Self {
        let last_update = clock.now();
        Self {
            stats: Stats::INITIAL,
            last_update,
            perfect: PerfectTracker::default(),
            config,
            clock,
        }
    }

    /// Catch stats up with elapsed wall-clock time.
    fn decay(&mut self) {
        let now = self.clock.now();
        let delta = now - self.last_update;
        let elapsed = delta
            .num_microseconds()
            .map(|us| us as f64 / 1_000_000.0)
            .unwrap_or_else(|| delta.num_seconds() as f64);

        if elapsed <= self.config.decay_grace_seconds {
            return;
        }

        let ticks = self.config.ticks(elapsed);
        self.stats.decay(ticks, &self.config.rates);
        self.last_update = now;

        log::debug!("Decay applied: {:.1}s elapsed, {:.2} ticks", elapsed, ticks);
    }

    /// Current snapshot, after decay.
    pub fn status(&mut self) -> Snapshot {
        self.decay();

        if self.perfect.observe(self.stats.is_perfect()) {
            log::info!("Bunny is perfect! (streak #{})", self.perfect.count());
            if self.perfect.easter_bunny() {
                log::info!("The easter bunny has appeared");
            }
        }

        Snapshot {
            hunger: self.stats.hunger,
            happiness: self.stats.happiness,
            cleanliness: self.stats.cleanliness,
            energy: self.stats.energy,
            overall_health: self.stats.overall_health(),
            easter_bunny: self.perfect.easter_bunny(),
        }
    }

    pub fn feed(&mut self, food: Food) -> Snapshot {
        self.decay();
        self.stats.adjust(food.effect());
        self.status()
    }

    pub fn play(&mut self, kind: PlayKind) -> Snapshot {
        self.decay();
        self.stats.adjust(kind.effect());
        self.status()
    }

    pub fn clean(&mut self) -> Snapshot {
        self.decay();
        self.stats.adjust(clean_effect());
        self.status()
    }

    /// Back to startup values, including the perfect streak counter.
    pub fn reset(&mut self) -> Snapshot {
        self.stats = Stats::INITIAL;
        self.last_update = self.clock.now();
        self.perfect = PerfectTracker::default();
        log::info!("Bunny reset");
        self.status()
    }

    pub fn apply(&mut self, action: Action) -> Snapshot {
        match action {
            Action::Feed(food) => self.feed(food),
            Action::Play(kind) => self.play(kind),
            Action::Clean => self.clean(),
            Action::Reset => self.reset(),
        }
    }

    /// Stats as of the last operation, without applying decay.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn perfect_count(&self) -> u32 {
        self.perfect.count()
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn config(&self) -> &BunnyConfig {
        &self.config
    }
}
