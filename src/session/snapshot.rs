// src/session/snapshot.rs
// Normalized hand state plus the pure legality queries over it. A
// snapshot is rebuilt wholesale from every engine response; nothing here
// mutates incrementally across responses.

use serde::{Deserialize, Serialize};

use crate::cards::{normalize_cards, Card, CardSlot};
use crate::client::WireHandState;
use crate::error::SessionError;

/// Big-blind increment assumed when the engine omits `min_bet`.
const DEFAULT_MIN_BET: u64 = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "preflop" => Some(Street::Preflop),
            "flop" => Some(Street::Flop),
            "turn" => Some(Street::Turn),
            "river" | "showdown" => Some(Street::River),
            _ => None,
        }
    }

    pub fn from_board_len(len: usize) -> Self {
        match len {
            3 => Street::Flop,
            4 => Street::Turn,
            5 => Street::River,
            _ => Street::Preflop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Actor {
    Player,
    Opponent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
    Split,
}

impl Winner {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "player" | "you" => Some(Winner::Player),
            "bot" | "opponent" => Some(Winner::Opponent),
            "split" | "tie" => Some(Winner::Split),
            _ => None,
        }
    }
}

/// The engine's own notion of an available action, carried for display
/// only; legality decisions always come from `derive_legal_actions`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// Parses the engine's uppercase action strings ("FOLD", "CALL 10",
/// "RAISE or ALL-IN"). Unknown strings are skipped.
pub fn parse_server_actions(raw: &[String]) -> Vec<ActionKind> {
    let mut actions = Vec::new();
    for entry in raw {
        let normalized = entry.trim().to_uppercase();
        if normalized.starts_with("FOLD") {
            actions.push(ActionKind::Fold);
        } else if normalized.starts_with("CHECK") {
            actions.push(ActionKind::Check);
        } else if normalized.starts_with("CALL") {
            actions.push(ActionKind::Call);
        } else if normalized.starts_with("BET") {
            actions.push(ActionKind::Bet);
        } else if normalized.starts_with("RAISE") || normalized.contains("ALL-IN") || normalized.contains("ALL IN") {
            actions.push(ActionKind::Raise);
        }
    }
    actions
}

/// Authoritative state of one hand at a point in time, normalized from
/// the wire payload with negative amounts clamped to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSnapshot {
    pub pot: u64,
    pub board_cards: Vec<Card>,
    pub player_cards: Vec<CardSlot>,
    pub opponent_cards: Vec<CardSlot>,
    pub player_stack: u64,
    pub opponent_stack: u64,
    pub current_bet: u64,
    pub player_current_bet: u64,
    pub street: Street,
    pub current_actor: Actor,
    pub hand_complete: bool,
    pub winner: Option<Winner>,
    pub min_bet: u64,
    pub min_raise: Option<u64>,
    pub last_action: Option<String>,
    pub hands_played: u64,
    pub message: Option<String>,
    pub server_actions: Vec<ActionKind>,
}

fn clamp(value: Option<i64>) -> u64 {
    value.unwrap_or(0).max(0) as u64
}

impl From<WireHandState> for HandSnapshot {
    fn from(wire: WireHandState) -> Self {
        // Board cards must be face-up to mean anything; a slot the engine
        // sent but we could not read is dropped rather than rendered.
        let board_cards: Vec<Card> = normalize_cards(&wire.board_cards)
            .into_iter()
            .filter_map(CardSlot::card)
            .collect();

        let street = wire
            .current_street
            .as_deref()
            .and_then(Street::from_name)
            .unwrap_or_else(|| Street::from_board_len(board_cards.len()));

        // Showdown reveals replace whatever placeholder cards were listed.
        let opponent_cards = match &wire.showdown_cards {
            Some(cards) if !cards.opponent_cards.is_empty() => normalize_cards(&cards.opponent_cards),
            _ => normalize_cards(&wire.bot_cards),
        };

        let current_actor = if wire.is_player_turn.unwrap_or(false) {
            Actor::Player
        } else {
            Actor::Opponent
        };

        HandSnapshot {
            pot: clamp(wire.pot),
            player_cards: normalize_cards(&wire.player_cards),
            opponent_cards,
            board_cards,
            player_stack: clamp(wire.player_stack),
            opponent_stack: clamp(wire.bot_stack),
            current_bet: clamp(wire.current_bet),
            player_current_bet: clamp(wire.player_current_bet),
            street,
            current_actor,
            hand_complete: wire.hand_complete.unwrap_or(false),
            winner: wire.winner.as_deref().and_then(Winner::from_name),
            min_bet: match wire.min_bet {
                Some(v) if v > 0 => v as u64,
                _ => DEFAULT_MIN_BET,
            },
            min_raise: wire.min_raise.filter(|v| *v > 0).map(|v| v as u64),
            last_action: wire.last_bot_action,
            hands_played: wire.hands_played.unwrap_or(0),
            message: wire.game_message,
            server_actions: parse_server_actions(&wire.legal_actions),
        }
    }
}

/// What the player may legally do right now, derived locally from the
/// snapshot alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalActions {
    pub can_check: bool,
    pub needs_to_call: bool,
    pub call_amount: u64,
    pub min_raise: u64,
}

/// Pure legality derivation. Tolerates snapshots that momentarily
/// violate `player_current_bet <= current_bet` (stale data mid
/// transition): the call amount clamps to zero instead of going
/// negative.
pub fn derive_legal_actions(snapshot: &HandSnapshot) -> LegalActions {
    let call_amount = snapshot.current_bet.saturating_sub(snapshot.player_current_bet);
    let can_check = snapshot.current_bet == 0 || snapshot.player_current_bet >= snapshot.current_bet;
    let needs_to_call = snapshot.current_bet > 0 && snapshot.player_current_bet < snapshot.current_bet;

    // Engine-declared minimum takes precedence. The fallback doubles an
    // outstanding bet; with nothing outstanding the minimum opening bet
    // is one big blind.
    let min_raise = snapshot.min_raise.unwrap_or(if snapshot.current_bet > 0 {
        snapshot.current_bet * 2
    } else {
        snapshot.min_bet
    });

    LegalActions {
        can_check,
        needs_to_call,
        call_amount,
        min_raise,
    }
}

/// Client-side raise pre-check; failures never reach the network. The
/// engine remains the final authority and may still reject.
pub fn validate_raise(snapshot: &HandSnapshot, to: u64) -> Result<(), SessionError> {
    let legal = derive_legal_actions(snapshot);
    if to < legal.min_raise {
        return Err(SessionError::Validation(format!(
            "raise to {to} is below the minimum of {}",
            legal.min_raise
        )));
    }
    let all_in_level = snapshot.player_stack + snapshot.player_current_bet;
    if to > all_in_level {
        return Err(SessionError::Validation(format!(
            "raise to {to} exceeds your stack ({all_in_level} available)"
        )));
    }
    Ok(())
}
