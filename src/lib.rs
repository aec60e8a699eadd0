// src/lib.rs
// Client core for a heads-up poker session: reconciles authoritative
// engine snapshots into renderable state, and classifies starting hands
// for the range advisory chart.

pub mod advisor;
pub mod cards;
pub mod client;
pub mod error;
pub mod session;

pub use advisor::{
    dominant_action, equity, equity_color, frequency_color, hand_label_at, strength_tier,
    AdvisedAction, Archetype, ChartTile, DisplayMode, DominantAction, Frequencies, RangeAdvisor,
    Tier, TileColor,
};
pub use cards::{normalize_card, normalize_cards, Card, CardSlot, Rank, RawCard, Suit};
pub use client::{ActionRequest, EngineClient, EngineConfig, NewSession, WireHandState};
pub use error::SessionError;
pub use session::{
    derive_legal_actions, validate_raise, ActionKind, Actor, Cooldown, HandSnapshot, LegalActions,
    NewHandOutcome, Phase, SessionStateModel, Street, Winner,
};
