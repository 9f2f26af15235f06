//! Care actions and their effect on the bunny's stats.
//!
//! Actions are validated into typed values ([`Food`], [`PlayKind`]) before
//! they reach the engine; an unrecognized kind becomes an [`ActionError`]
//! and never touches state.

use std::fmt;

use thiserror::Error;

use crate::stats::StatDelta;

/// Pellets satisfy hunger up to this cap, however many are fed at once.
const PELLET_SATIATION_CAP: f64 = 10.0;

/// Pellets beyond this count make twice the mess.
const PELLET_TIDY_LIMIT: f64 = 5.0;

/// Every meal gives this much energy.
const MEAL_ENERGY: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Invalid feed kind. Use 'carrot' or 'pellet'.")]
    InvalidFeedKind,
    #[error("Invalid play kind. Use 'pat' or 'toy'.")]
    InvalidPlayKind,
}

/// What the bunny is fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Food {
    Carrot,
    /// `count` is taken as given; the effect formulas taper extreme values.
    Pellet { count: i64 },
}

impl Food {
    /// Validate a raw feed request. `pellet_count` defaults to 1 and is
    /// ignored for carrots.
    pub fn parse(kind: Option<&str>, pellet_count: Option<i64>) -> Result<Self, ActionError> {
        match kind {
            Some("carrot") => Ok(Food::Carrot),
            Some("pellet") => Ok(Food::Pellet {
                count: pellet_count.unwrap_or(1),
            }),
            _ => Err(ActionError::InvalidFeedKind),
        }
    }

    pub fn effect(self) -> StatDelta {
        match self {
            Food::Carrot => StatDelta {
                hunger: -18.0,
                happiness: 6.0,
                energy: MEAL_ENERGY,
                ..Default::default()
            },
            Food::Pellet { count } => StatDelta {
                hunger: -pellet_satiation(count),
                cleanliness: -pellet_mess(count),
                energy: MEAL_ENERGY,
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Food::Carrot => write!(f, "carrot"),
            Food::Pellet { count } => write!(f, "pellet x{}", count),
        }
    }
}

/// How the bunny is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Pat,
    Toy,
}

impl PlayKind {
    pub fn parse(kind: Option<&str>) -> Result<Self, ActionError> {
        match kind {
            Some("pat") => Ok(PlayKind::Pat),
            Some("toy") => Ok(PlayKind::Toy),
            _ => Err(ActionError::InvalidPlayKind),
        }
    }

    pub fn effect(self) -> StatDelta {
        match self {
            PlayKind::Pat => StatDelta {
                happiness: 10.0,
                energy: 3.0,
                ..Default::default()
            },
            // Messy play.
            PlayKind::Toy => StatDelta {
                happiness: 16.0,
                energy: -8.0,
                cleanliness: -2.0,
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for PlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayKind::Pat => write!(f, "pat"),
            PlayKind::Toy => write!(f, "toy"),
        }
    }
}

/// Effect of a bath.
pub fn clean_effect() -> StatDelta {
    StatDelta {
        cleanliness: 25.0,
        happiness: 4.0,
        ..Default::default()
    }
}

/// Hunger relief from `count` pellets: two each, capped.
pub fn pellet_satiation(count: i64) -> f64 {
    (2.0 * count as f64).min(PELLET_SATIATION_CAP)
}

/// Cleanliness cost of `count` pellets: one each up to the tidy limit,
/// two each after that.
pub fn pellet_mess(count: i64) -> f64 {
    let count = count as f64;
    if count <= PELLET_TIDY_LIMIT {
        count
    } else {
        PELLET_TIDY_LIMIT + 2.0 * (count - PELLET_TIDY_LIMIT)
    }
}

/// Any operation a caller can run against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Feed(Food),
    Play(PlayKind),
    Clean,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food() {
        assert_eq!(Food::parse(Some("carrot"), None), Ok(Food::Carrot));
        assert_eq!(Food::parse(Some("carrot"), Some(7)), Ok(Food::Carrot));
        assert_eq!(
            Food::parse(Some("pellet"), None),
            Ok(Food::Pellet { count: 1 })
        );
        assert_eq!(
            Food::parse(Some("pellet"), Some(4)),
            Ok(Food::Pellet { count: 4 })
        );
        assert_eq!(
            Food::parse(Some("banana"), None),
            Err(ActionError::InvalidFeedKind)
        );
        assert_eq!(Food::parse(None, None), Err(ActionError::InvalidFeedKind));
        // Kinds from the other endpoint are still invalid here
        assert_eq!(Food::parse(Some("toy"), None), Err(ActionError::InvalidFeedKind));
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(PlayKind::parse(Some("pat")), Ok(PlayKind::Pat));
        assert_eq!(PlayKind::parse(Some("toy")), Ok(PlayKind::Toy));
        assert_eq!(PlayKind::parse(Some("Pat")), Err(ActionError::InvalidPlayKind));
        assert_eq!(PlayKind::parse(Some("carrot")), Err(ActionError::InvalidPlayKind));
        assert_eq!(PlayKind::parse(None), Err(ActionError::InvalidPlayKind));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ActionError::InvalidFeedKind.to_string(),
            "Invalid feed kind. Use 'carrot' or 'pellet'."
        );
        assert_eq!(
            ActionError::InvalidPlayKind.to_string(),
            "Invalid play kind. Use 'pat' or 'toy'."
        );
    }

    #[test]
    fn test_pellet_satiation_capped() {
        assert_eq!(pellet_satiation(1), 2.0);
        assert_eq!(pellet_satiation(5), 10.0);
        assert_eq!(pellet_satiation(6), 10.0);
        assert_eq!(pellet_satiation(100), 10.0);
    }

    #[test]
    fn test_pellet_mess_tapers() {
        assert_eq!(pellet_mess(1), 1.0);
        assert_eq!(pellet_mess(5), 5.0);
        assert_eq!(pellet_mess(6), 7.0);
        assert_eq!(pellet_mess(10), 15.0);
    }

    #[test]
    fn test_pellet_extreme_counts_do_not_overflow() {
        assert_eq!(pellet_satiation(i64::MAX), 10.0);
        assert!(pellet_mess(i64::MAX).is_finite());
        // Negative counts are accepted; they simply run the formulas backwards
        assert_eq!(pellet_satiation(-3), -6.0);
        assert_eq!(pellet_mess(-3), -3.0);
    }

    #[test]
    fn test_carrot_effect() {
        let d = Food::Carrot.effect();
        assert_eq!(d.hunger, -18.0);
        assert_eq!(d.happiness, 6.0);
        assert_eq!(d.cleanliness, 0.0);
        assert_eq!(d.energy, 5.0);
    }

    #[test]
    fn test_toy_effect() {
        let d = PlayKind::Toy.effect();
        assert_eq!(d.happiness, 16.0);
        assert_eq!(d.energy, -8.0);
        assert_eq!(d.cleanliness, -2.0);
        assert_eq!(d.hunger, 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Food::Pellet { count: 3 }.to_string(), "pellet x3");
        assert_eq!(PlayKind::Toy.to_string(), "toy");
    }
}
