// src/advisor/equity.rs
// Preflop equity of every canonical starting hand versus a uniformly
// random hand, heads-up. Constant lookup data; nothing is computed at
// runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Equity assumed for a label missing from the table. Full coverage
/// makes this unreachable in practice; it exists so lookups stay total.
pub const FALLBACK_EQUITY: f64 = 30.0;

/// Win percentage vs. a random hand for all 169 starting-hand labels:
/// pairs ("AA"), suited combos ("AKs"), offsuit combos ("AK").
static HAND_EQUITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HAND_EQUITY_TABLE.iter().copied().collect()
});

#[rustfmt::skip]
const HAND_EQUITY_TABLE: [(&str, f64); 169] = [
    // Pairs
    ("AA", 85.2), ("KK", 82.4), ("QQ", 79.9), ("JJ", 77.5), ("TT", 75.1),
    ("99", 72.1), ("88", 69.0), ("77", 66.1), ("66", 63.4), ("55", 60.7),
    ("44", 57.9), ("33", 55.2), ("22", 52.3),
    // Ace-high
    ("AKs", 67.0), ("AQs", 66.1), ("AJs", 65.4), ("ATs", 64.7), ("A9s", 62.8),
    ("A8s", 61.9), ("A7s", 61.0), ("A6s", 60.1), ("A5s", 60.2), ("A4s", 59.9),
    ("A3s", 59.5), ("A2s", 59.1),
    ("AK", 65.4), ("AQ", 64.5), ("AJ", 63.6), ("AT", 62.7), ("A9", 60.8),
    ("A8", 59.9), ("A7", 59.0), ("A6", 58.1), ("A5", 58.2), ("A4", 57.9),
    ("A3", 57.5), ("A2", 57.1),
    // King-high
    ("KQs", 63.4), ("KJs", 62.7), ("KTs", 62.0), ("K9s", 60.1), ("K8s", 59.2),
    ("K7s", 58.3), ("K6s", 57.4), ("K5s", 56.5), ("K4s", 55.6), ("K3s", 54.7),
    ("K2s", 53.8),
    ("KQ", 61.8), ("KJ", 61.1), ("KT", 60.4), ("K9", 58.5), ("K8", 57.6),
    ("K7", 56.7), ("K6", 55.8), ("K5", 54.9), ("K4", 54.0), ("K3", 53.1),
    ("K2", 52.2),
    // Queen-high
    ("QJs", 60.0), ("QTs", 59.3), ("Q9s", 57.4), ("Q8s", 56.5), ("Q7s", 55.6),
    ("Q6s", 54.7), ("Q5s", 53.8), ("Q4s", 52.9), ("Q3s", 52.0), ("Q2s", 51.1),
    ("QJ", 58.4), ("QT", 57.7), ("Q9", 55.8), ("Q8", 54.9), ("Q7", 54.0),
    ("Q6", 53.1), ("Q5", 52.2), ("Q4", 51.3), ("Q3", 50.4), ("Q2", 49.5),
    // Jack-high
    ("JTs", 56.6), ("J9s", 54.7), ("J8s", 53.8), ("J7s", 52.9), ("J6s", 52.0),
    ("J5s", 51.1), ("J4s", 50.2), ("J3s", 49.3), ("J2s", 48.4),
    ("JT", 55.0), ("J9", 53.1), ("J8", 52.2), ("J7", 51.3), ("J6", 50.4),
    ("J5", 49.5), ("J4", 48.6), ("J3", 47.7), ("J2", 46.8),
    // Ten-high
    ("T9s", 52.0), ("T8s", 51.1), ("T7s", 50.2), ("T6s", 49.3), ("T5s", 48.4),
    ("T4s", 47.5), ("T3s", 46.6), ("T2s", 45.7),
    ("T9", 50.4), ("T8", 49.5), ("T7", 48.6), ("T6", 47.7), ("T5", 46.8),
    ("T4", 45.9), ("T3", 45.0), ("T2", 44.1),
    // Nine-high
    ("98s", 48.4), ("97s", 47.5), ("96s", 46.6), ("95s", 45.7), ("94s", 44.8),
    ("93s", 43.9), ("92s", 43.0),
    ("98", 46.8), ("97", 45.9), ("96", 45.0), ("95", 44.1), ("94", 43.2),
    ("93", 42.3), ("92", 41.4),
    // Eight-high
    ("87s", 45.8), ("86s", 44.9), ("85s", 44.0), ("84s", 43.1), ("83s", 42.2),
    ("82s", 41.3),
    ("87", 44.2), ("86", 43.3), ("85", 42.4), ("84", 41.5), ("83", 40.6),
    ("82", 39.7),
    // Seven-high
    ("76s", 43.2), ("75s", 42.3), ("74s", 41.4), ("73s", 40.5), ("72s", 39.6),
    ("76", 41.6), ("75", 40.7), ("74", 39.8), ("73", 38.9), ("72", 38.0),
    // Six-high
    ("65s", 40.6), ("64s", 39.7), ("63s", 38.8), ("62s", 37.9),
    ("65", 39.0), ("64", 38.1), ("63", 37.2), ("62", 36.3),
    // Five-high
    ("54s", 38.0), ("53s", 37.1), ("52s", 36.2),
    ("54", 36.4), ("53", 35.5), ("52", 34.6),
    // Four-high and below
    ("43s", 35.4), ("42s", 34.5),
    ("43", 33.8), ("42", 32.9),
    ("32s", 32.8),
    ("32", 31.2),
];

/// Equity lookup, total over any label.
pub fn equity(label: &str) -> f64 {
    HAND_EQUITY.get(label).copied().unwrap_or(FALLBACK_EQUITY)
}
