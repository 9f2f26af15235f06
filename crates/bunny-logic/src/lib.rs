//! Pure simulation logic for the virtual bunny.
//!
//! This crate contains all pet logic that is independent of any transport
//! or runtime. Time enters only through the [`clock::Clock`] trait, so every
//! operation can be driven deterministically from tests.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Care actions (feed, play, clean) and their stat effects |
//! | [`clock`] | Wall-clock abstraction with a manual clock for tests |
//! | [`config`] | Decay rates and grace period |
//! | [`engine`] | The stateful bunny: lazy decay, actions, snapshots |
//! | [`stats`] | Stat vector, clamping, health score, perfect condition |
//!
//! # Example
//!
//! ```
//! use bunny_logic::actions::Food;
//! use bunny_logic::clock::ManualClock;
//! use bunny_logic::engine::BunnyEngine;
//!
//! let clock = ManualClock::default();
//! let mut bunny = BunnyEngine::with_clock(clock.clone());
//!
//! let snap = bunny.feed(Food::Carrot);
//! assert_eq!(snap.hunger, 22.0);
//!
//! clock.advance(60.0);
//! assert!(bunny.status().hunger > 22.0);
//! ```

pub mod actions;
pub mod clock;
pub mod config;
pub mod engine;
pub mod stats;

pub use actions::{Action, ActionError, Food, PlayKind};
pub use engine::{BunnyEngine, Snapshot};
