// src/advisor/archetypes.rs
// Opponent behavioral profiles and their per-tier action frequencies.
// Static policy tables; nothing here is learned or updated.

use serde::{Deserialize, Serialize};

use super::Tier;

/// Fixed opponent profiles shown in the action-frequency chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Very tight, very conservative.
    Nit,
    /// Plays almost everything aggressively.
    Maniac,
    LooseAggressive,
    TightAggressive,
    /// Calls far more than raising or folding.
    CallingStation,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Nit,
        Archetype::Maniac,
        Archetype::LooseAggressive,
        Archetype::TightAggressive,
        Archetype::CallingStation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Nit => "nit",
            Archetype::Maniac => "maniac",
            Archetype::LooseAggressive => "loose-aggressive",
            Archetype::TightAggressive => "tight-aggressive",
            Archetype::CallingStation => "calling-station",
        }
    }

    /// How often this profile raises, calls, and folds a hand of the
    /// given strength tier. Every triple sums to 100.
    pub fn frequencies(self, tier: Tier) -> Frequencies {
        use Tier::*;
        let (raise, call, fold) = match self {
            Archetype::Nit => match tier {
                Premium => (85, 10, 5),
                Strong => (25, 40, 35),
                Playable => (5, 15, 80),
                Marginal => (0, 5, 95),
                Weak => (0, 0, 100),
            },
            Archetype::Maniac => match tier {
                Premium => (95, 5, 0),
                Strong => (80, 15, 5),
                Playable => (60, 30, 10),
                Marginal => (40, 45, 15),
                Weak => (25, 55, 20),
            },
            Archetype::LooseAggressive => match tier {
                Premium => (90, 8, 2),
                Strong => (70, 25, 5),
                Playable => (45, 35, 20),
                Marginal => (20, 50, 30),
                Weak => (5, 25, 70),
            },
            Archetype::TightAggressive => match tier {
                Premium => (88, 10, 2),
                Strong => (65, 30, 5),
                Playable => (35, 40, 25),
                Marginal => (10, 30, 60),
                Weak => (2, 8, 90),
            },
            Archetype::CallingStation => match tier {
                Premium => (45, 50, 5),
                Strong => (25, 65, 10),
                Playable => (15, 70, 15),
                Marginal => (8, 75, 17),
                Weak => (3, 60, 37),
            },
        };
        Frequencies { raise, call, fold }
    }
}

/// Action mix for one tier under one archetype, in whole percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frequencies {
    pub raise: u8,
    pub call: u8,
    pub fold: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdvisedAction {
    Raise,
    Call,
    Fold,
}

impl AdvisedAction {
    pub fn letter(self) -> char {
        match self {
            AdvisedAction::Raise => 'R',
            AdvisedAction::Call => 'C',
            AdvisedAction::Fold => 'F',
        }
    }
}

/// The most frequent action with its percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantAction {
    pub action: AdvisedAction,
    pub pct: u8,
}

impl Frequencies {
    /// Highest-frequency action; exact ties resolve raise over call over
    /// fold (the first listed wins).
    pub fn dominant(self) -> DominantAction {
        if self.raise >= self.call && self.raise >= self.fold {
            DominantAction {
                action: AdvisedAction::Raise,
                pct: self.raise,
            }
        } else if self.call >= self.fold {
            DominantAction {
                action: AdvisedAction::Call,
                pct: self.call,
            }
        } else {
            DominantAction {
                action: AdvisedAction::Fold,
                pct: self.fold,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_triple_sums_to_one_hundred() {
        for archetype in Archetype::ALL {
            for tier in Tier::ALL {
                let f = archetype.frequencies(tier);
                assert_eq!(
                    f.raise as u16 + f.call as u16 + f.fold as u16,
                    100,
                    "{} / {:?}",
                    archetype.label(),
                    tier
                );
            }
        }
    }

    #[test]
    fn test_raise_wins_exact_tie_with_call() {
        let f = Frequencies { raise: 50, call: 50, fold: 0 };
        assert_eq!(
            f.dominant(),
            DominantAction { action: AdvisedAction::Raise, pct: 50 }
        );
    }

    #[test]
    fn test_call_wins_exact_tie_with_fold() {
        let f = Frequencies { raise: 10, call: 45, fold: 45 };
        assert_eq!(
            f.dominant(),
            DominantAction { action: AdvisedAction::Call, pct: 45 }
        );
    }

    #[test]
    fn test_known_dominant_actions() {
        let nit_weak = Archetype::Nit.frequencies(Tier::Weak).dominant();
        assert_eq!(nit_weak.action, AdvisedAction::Fold);
        assert_eq!(nit_weak.pct, 100);

        let station_premium = Archetype::CallingStation.frequencies(Tier::Premium).dominant();
        assert_eq!(station_premium.action, AdvisedAction::Call);

        let maniac_weak = Archetype::Maniac.frequencies(Tier::Weak).dominant();
        assert_eq!(maniac_weak.action, AdvisedAction::Call);
        assert_eq!(maniac_weak.pct, 55);
    }
}
