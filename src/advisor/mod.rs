// src/advisor/mod.rs
// Starting-hand range advisory: the 13x13 grid of canonical hands with
// equity, strength-tier and archetype-frequency views, plus a
// user-colored custom view. Pure lookups and threshold classification;
// referenced during strategy study, not live decisioning.

pub mod archetypes;
pub mod equity;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use archetypes::{AdvisedAction, Archetype, DominantAction, Frequencies};
pub use equity::{equity, FALLBACK_EQUITY};

/// Rank ordering for both grid axes. The suited/offsuit split below is a
/// pure function of row/col comparison only under this exact ordering.
pub const GRID_RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

pub const GRID_SIZE: usize = 13;

/// Discrete strength classification derived from equity. Boundaries are
/// inclusive on the lower bound of each tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    Premium,
    Strong,
    Playable,
    Marginal,
    Weak,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Premium,
        Tier::Strong,
        Tier::Playable,
        Tier::Marginal,
        Tier::Weak,
    ];

    pub fn for_equity(equity: f64) -> Self {
        if equity >= 75.0 {
            Tier::Premium
        } else if equity >= 65.0 {
            Tier::Strong
        } else if equity >= 55.0 {
            Tier::Playable
        } else if equity >= 45.0 {
            Tier::Marginal
        } else {
            Tier::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Premium => "premium",
            Tier::Strong => "strong",
            Tier::Playable => "playable",
            Tier::Marginal => "marginal",
            Tier::Weak => "weak",
        }
    }
}

/// The fixed chart palette. Hex values are what the table UI renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TileColor {
    DeepRed,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Gray,
    Neutral,
}

impl TileColor {
    pub fn hex(self) -> &'static str {
        match self {
            TileColor::DeepRed => "#dc2626",
            TileColor::Red => "#ef4444",
            TileColor::Orange => "#f97316",
            TileColor::Yellow => "#eab308",
            TileColor::Green => "#22c55e",
            TileColor::Blue => "#3b82f6",
            TileColor::Gray => "#4b5563",
            TileColor::Neutral => "#404040",
        }
    }
}

/// The three mutually exclusive chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Equity,
    ActionFrequency(Archetype),
    Custom,
}

/// One renderable grid cell under a display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTile {
    pub label: String,
    pub color: String,
    pub text: String,
}

/// Canonical label at a grid position: diagonal cells are pairs, the
/// upper triangle is suited, the lower triangle offsuit (higher rank
/// written first, no suffix).
pub fn hand_label_at(row: usize, col: usize) -> String {
    let r1 = GRID_RANKS[row];
    let r2 = GRID_RANKS[col];
    if row == col {
        format!("{r1}{r1}")
    } else if row < col {
        format!("{r1}{r2}s")
    } else {
        format!("{r2}{r1}")
    }
}

pub fn strength_tier(label: &str) -> Tier {
    Tier::for_equity(equity(label))
}

/// Bucketed shade for the equity view.
pub fn equity_color(label: &str) -> TileColor {
    let equity = equity(label);
    if equity >= 80.0 {
        TileColor::DeepRed
    } else if equity >= 70.0 {
        TileColor::Red
    } else if equity >= 60.0 {
        TileColor::Orange
    } else if equity >= 50.0 {
        TileColor::Yellow
    } else if equity >= 40.0 {
        TileColor::Green
    } else if equity >= 35.0 {
        TileColor::Blue
    } else {
        TileColor::Gray
    }
}

pub fn dominant_action(label: &str, archetype: Archetype) -> DominantAction {
    archetype.frequencies(strength_tier(label)).dominant()
}

/// Shade for the action-frequency view: raise-dominant hands grade by
/// raise frequency, call-dominant are blue, fold-dominant gray.
pub fn frequency_color(label: &str, archetype: Archetype) -> TileColor {
    let dominant = dominant_action(label, archetype);
    match dominant.action {
        AdvisedAction::Raise => {
            if dominant.pct >= 80 {
                TileColor::DeepRed
            } else if dominant.pct >= 60 {
                TileColor::Red
            } else if dominant.pct >= 40 {
                TileColor::Orange
            } else {
                TileColor::Yellow
            }
        }
        AdvisedAction::Call => TileColor::Blue,
        AdvisedAction::Fold => TileColor::Gray,
    }
}

/// Chart state. Everything is constant except the custom-view colors,
/// which are per-advisor and keyed by hand label, last write winning.
#[derive(Debug, Default, Clone)]
pub struct RangeAdvisor {
    custom_colors: HashMap<String, String>,
}

impl RangeAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_custom_color(&mut self, label: impl Into<String>, hex: impl Into<String>) {
        self.custom_colors.insert(label.into(), hex.into());
    }

    pub fn clear_custom_color(&mut self, label: &str) {
        self.custom_colors.remove(label);
    }

    pub fn reset_custom_colors(&mut self) {
        self.custom_colors.clear();
    }

    pub fn custom_color(&self, label: &str) -> Option<&str> {
        self.custom_colors.get(label).map(String::as_str)
    }

    /// The one cell query the chart renders from. Equity cells show the
    /// rounded percentage, frequency cells the dominant-action letter
    /// with its percentage, custom cells no text at all.
    pub fn tile(&self, row: usize, col: usize, mode: DisplayMode) -> ChartTile {
        let label = hand_label_at(row, col);
        match mode {
            DisplayMode::Equity => ChartTile {
                color: equity_color(&label).hex().to_string(),
                text: format!("{}", equity(&label).round() as i64),
                label,
            },
            DisplayMode::ActionFrequency(archetype) => {
                let dominant = dominant_action(&label, archetype);
                ChartTile {
                    color: frequency_color(&label, archetype).hex().to_string(),
                    text: format!("{}{}", dominant.action.letter(), dominant.pct),
                    label,
                }
            }
            DisplayMode::Custom => ChartTile {
                color: self
                    .custom_color(&label)
                    .unwrap_or(TileColor::Neutral.hex())
                    .to_string(),
                text: String::new(),
                label,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_labels() {
        assert_eq!(hand_label_at(0, 0), "AA");
        assert_eq!(hand_label_at(12, 12), "22");
        assert_eq!(hand_label_at(0, 1), "AKs");
        assert_eq!(hand_label_at(1, 0), "AK");
        assert_eq!(hand_label_at(4, 12), "T2s");
        assert_eq!(hand_label_at(12, 4), "T2");
    }

    #[test]
    fn test_mirrored_cells_are_suited_and_offsuit_of_same_pair() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if row == col {
                    let pair = hand_label_at(row, col);
                    assert_eq!(pair.len(), 2);
                    let mut chars = pair.chars();
                    assert_eq!(chars.next(), chars.next());
                } else if row < col {
                    let suited = hand_label_at(row, col);
                    let offsuit = hand_label_at(col, row);
                    assert_eq!(suited.strip_suffix('s'), Some(offsuit.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_tier_is_total_and_partitions_by_equity() {
        let mut seen = std::collections::HashSet::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let label = hand_label_at(row, col);
                let equity = equity(&label);
                // Full table coverage: no cell hits the defensive default.
                assert_ne!(equity, FALLBACK_EQUITY, "{label} missing from table");
                let expected = Tier::for_equity(equity);
                assert_eq!(strength_tier(&label), expected);
                seen.insert(label);
            }
        }
        assert_eq!(seen.len(), 169);
    }

    #[test]
    fn test_tier_boundaries_resolve_upward() {
        assert_eq!(Tier::for_equity(75.0), Tier::Premium);
        assert_eq!(Tier::for_equity(74.9), Tier::Strong);
        assert_eq!(Tier::for_equity(65.0), Tier::Strong);
        assert_eq!(Tier::for_equity(64.9), Tier::Playable);
        assert_eq!(Tier::for_equity(55.0), Tier::Playable);
        assert_eq!(Tier::for_equity(45.0), Tier::Marginal);
        assert_eq!(Tier::for_equity(44.9), Tier::Weak);
    }

    #[test]
    fn test_equity_color_buckets() {
        assert_eq!(equity_color("AA"), TileColor::DeepRed); // 85.2
        assert_eq!(equity_color("JJ"), TileColor::Red); // 77.5
        assert_eq!(equity_color("77"), TileColor::Orange); // 66.1
        assert_eq!(equity_color("K5s"), TileColor::Yellow); // 56.5
        assert_eq!(equity_color("98s"), TileColor::Green); // 48.4
        assert_eq!(equity_color("72"), TileColor::Blue); // 38.0
        assert_eq!(equity_color("32"), TileColor::Gray); // 31.2
    }

    #[test]
    fn test_frequency_tiles() {
        let advisor = RangeAdvisor::new();
        let tile = advisor.tile(0, 0, DisplayMode::ActionFrequency(Archetype::Nit));
        assert_eq!(tile.label, "AA");
        assert_eq!(tile.text, "R85");
        assert_eq!(tile.color, TileColor::DeepRed.hex());

        let tile = advisor.tile(12, 4, DisplayMode::ActionFrequency(Archetype::Nit));
        assert_eq!(tile.label, "T2");
        assert_eq!(tile.text, "F100");
        assert_eq!(tile.color, TileColor::Gray.hex());
    }

    #[test]
    fn test_equity_tiles_show_rounded_percent() {
        let advisor = RangeAdvisor::new();
        let tile = advisor.tile(0, 0, DisplayMode::Equity);
        assert_eq!(tile.text, "85");
        let tile = advisor.tile(0, 1, DisplayMode::Equity);
        assert_eq!(tile.text, "67");
    }

    #[test]
    fn test_custom_colors_last_write_wins() {
        let mut advisor = RangeAdvisor::new();
        advisor.set_custom_color("AKs", "#16a34a");
        advisor.set_custom_color("AKs", "#9333ea");
        assert_eq!(advisor.custom_color("AKs"), Some("#9333ea"));

        let tile = advisor.tile(0, 1, DisplayMode::Custom);
        assert_eq!(tile.color, "#9333ea");
        assert!(tile.text.is_empty());

        // Unset hands render the neutral default.
        let tile = advisor.tile(1, 0, DisplayMode::Custom);
        assert_eq!(tile.color, TileColor::Neutral.hex());

        advisor.reset_custom_colors();
        assert_eq!(advisor.custom_color("AKs"), None);
    }
}
