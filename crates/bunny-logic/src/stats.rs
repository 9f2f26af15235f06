//! The bunny's stat vector and everything derived from it.
//!
//! All four stats live in `[0, 100]`:
//!
//! | Stat | 0 | 100 |
//! |------|---|-----|
//! | hunger | full | starving |
//! | happiness | sad | delighted |
//! | cleanliness | messy | sparkling |
//! | energy | exhausted | energized |
//!
//! Every mutation goes through [`clamp_stat`], so no sequence of actions
//! or elapsed time can push a stat outside that range.

use crate::config::DecayRates;

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

/// Hunger at or below this counts as perfectly fed.
const PERFECT_HUNGER: f64 = 0.1;

/// Happiness, cleanliness and energy at or above this count as perfect.
const PERFECT_HIGH: f64 = 99.9;

/// Bound `v` to `[lo, hi]`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Bound `v` to the stat range.
pub fn clamp_stat(v: f64) -> f64 {
    clamp(v, STAT_MIN, STAT_MAX)
}

/// Signed change to apply to each stat.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatDelta {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub energy: f64,
}

impl Stats {
    /// Values every new (or reset) bunny starts with.
    pub const INITIAL: Stats = Stats {
        hunger: 40.0,
        happiness: 70.0,
        cleanliness: 80.0,
        energy: 70.0,
    };

    /// Apply `ticks` worth of passive drift.
    pub fn decay(&mut self, ticks: f64, rates: &DecayRates) {
        self.hunger = clamp_stat(self.hunger + rates.hunger * ticks);
        self.happiness = clamp_stat(self.happiness - rates.happiness * ticks);
        self.cleanliness = clamp_stat(self.cleanliness - rates.cleanliness * ticks);
        self.energy = clamp_stat(self.energy + rates.energy * ticks);
    }

    /// Apply an action's effect. Zero fields leave their stat untouched.
    pub fn adjust(&mut self, delta: StatDelta) {
        self.hunger = clamp_stat(self.hunger + delta.hunger);
        self.happiness = clamp_stat(self.happiness + delta.happiness);
        self.cleanliness = clamp_stat(self.cleanliness + delta.cleanliness);
        self.energy = clamp_stat(self.energy + delta.energy);
    }

    /// Weighted wellbeing score, rounded to one decimal place.
    pub fn overall_health(&self) -> f64 {
        let raw = clamp_stat(100.0 - self.hunger) * 0.4
            + self.happiness * 0.3
            + self.cleanliness * 0.2
            + self.energy * 0.1;
        (raw * 10.0).round() / 10.0
    }

    /// Whether every stat sits at its ideal extreme.
    pub fn is_perfect(&self) -> bool {
        self.hunger <= PERFECT_HUNGER
            && self.happiness >= PERFECT_HIGH
            && self.cleanliness >= PERFECT_HIGH
            && self.energy >= PERFECT_HIGH
    }

    /// True when all four stats are inside the legal range.
    pub fn in_bounds(&self) -> bool {
        [self.hunger, self.happiness, self.cleanliness, self.energy]
            .iter()
            .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::INITIAL
    }
}
