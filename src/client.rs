// src/client.rs
// HTTP client for the remote poker engine. One base URL, bearer-token
// auth, JSON bodies; non-2xx responses surface the server's own error
// string.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::RawCard;
use crate::error::SessionError;

/// Connection settings for the remote engine, injected explicitly so the
/// session model stays testable without ambient environment state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub bearer_token: String,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("POKER_ENGINE_URL")
            .map_err(|_| "POKER_ENGINE_URL not found in environment".to_string())?;
        let bearer_token = std::env::var("POKER_ENGINE_TOKEN")
            .map_err(|_| "POKER_ENGINE_TOKEN not found in environment".to_string())?;
        Ok(Self { base_url, bearer_token })
    }
}

/// A player action submitted to the engine. Raise carries the new total
/// bet level, not an increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    Fold,
    Check,
    Call,
    Raise { to: u64 },
}

impl ActionRequest {
    pub fn action_type(&self) -> &'static str {
        match self {
            ActionRequest::Fold => "fold",
            ActionRequest::Check => "check",
            ActionRequest::Call => "call",
            ActionRequest::Raise { .. } => "raise",
        }
    }

    fn amount(&self) -> Option<u64> {
        match self {
            ActionRequest::Raise { to } => Some(*to),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct SessionBody<'a> {
    session_id: &'a str,
}

#[derive(Serialize)]
struct MoveBody<'a> {
    session_id: &'a str,
    action_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<u64>,
}

#[derive(Serialize)]
struct InitializeBody<'a> {
    mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    opponent_bot_id: Option<i64>,
}

#[derive(Deserialize)]
struct WireError {
    error: String,
}

/// Response to `/initialize-game`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub session_id: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The engine's hand-state payload as delivered. Every field is optional
/// on the wire; normalization into a `HandSnapshot` happens in one place
/// (`session::snapshot`), never piecemeal.
#[derive(Debug, Default, Deserialize)]
pub struct WireHandState {
    pub pot: Option<i64>,
    pub player_stack: Option<i64>,
    pub bot_stack: Option<i64>,
    #[serde(default)]
    pub player_cards: Vec<RawCard>,
    #[serde(default)]
    pub bot_cards: Vec<RawCard>,
    #[serde(default)]
    pub board_cards: Vec<RawCard>,
    #[serde(default)]
    pub legal_actions: Vec<String>,
    pub current_street: Option<String>,
    pub is_player_turn: Option<bool>,
    pub hand_complete: Option<bool>,
    pub winner: Option<String>,
    pub current_bet: Option<i64>,
    pub player_current_bet: Option<i64>,
    pub min_bet: Option<i64>,
    pub min_raise: Option<i64>,
    pub last_bot_action: Option<String>,
    pub street_changed: Option<bool>,
    pub showdown: Option<bool>,
    pub showdown_cards: Option<WireShowdownCards>,
    pub showdown_duration: Option<u32>,
    pub game_message: Option<String>,
    pub hands_played: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireShowdownCards {
    #[serde(default)]
    pub opponent_cards: Vec<RawCard>,
}

/// Thin wrapper around one shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: reqwest::Client,
    config: EngineConfig,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn initialize_game(
        &self,
        mode: &str,
        opponent_bot_id: Option<i64>,
    ) -> Result<NewSession, SessionError> {
        self.post_json("initialize-game", &InitializeBody { mode, opponent_bot_id })
            .await
    }

    pub async fn join_game(&self, session_id: &str) -> Result<WireHandState, SessionError> {
        self.post_json("join-game", &SessionBody { session_id }).await
    }

    pub async fn make_move(
        &self,
        session_id: &str,
        action: &ActionRequest,
    ) -> Result<WireHandState, SessionError> {
        let body = MoveBody {
            session_id,
            action_type: action.action_type(),
            amount: action.amount(),
        };
        self.post_json("make-move", &body).await
    }

    pub async fn start_hand(&self, session_id: &str) -> Result<WireHandState, SessionError> {
        self.post_json("start-hand", &SessionBody { session_id }).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, SessionError>
    where
        B: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(%url, "engine request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.bearer_token)
            .json(body)
            .send()
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<WireError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            warn!(status = status.as_u16(), %message, "engine rejected request");
            return Err(SessionError::EngineRejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| SessionError::Connection(format!("malformed engine response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{normalize_cards, Card, CardSlot, Rank, Suit};

    #[test]
    fn test_move_body_serialization() {
        let body = MoveBody {
            session_id: "abc",
            action_type: ActionRequest::Raise { to: 200 }.action_type(),
            amount: Some(200),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"session_id": "abc", "action_type": "raise", "amount": 200})
        );

        let body = MoveBody {
            session_id: "abc",
            action_type: ActionRequest::Check.action_type(),
            amount: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"session_id": "abc", "action_type": "check"}));
    }

    #[test]
    fn test_wire_state_parses_both_card_encodings() {
        let wire: WireHandState = serde_json::from_value(serde_json::json!({
            "pot": 300,
            "player_cards": ["Ah", {"rank": "K", "suit": "hearts", "suit_symbol": "♥"}],
            "board_cards": ["Qh", "Jh", "10s"],
            "is_player_turn": true
        }))
        .unwrap();

        assert_eq!(wire.pot, Some(300));
        let hole = normalize_cards(&wire.player_cards);
        assert_eq!(hole[0], CardSlot::Up(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(hole[1], CardSlot::Up(Card::new(Rank::King, Suit::Hearts)));
        let board = normalize_cards(&wire.board_cards);
        assert_eq!(board[2], CardSlot::Up(Card::new(Rank::Ten, Suit::Spades)));
    }

    #[test]
    fn test_wire_state_tolerates_missing_and_unknown_fields() {
        let wire: WireHandState = serde_json::from_value(serde_json::json!({
            "game_message": "Your turn!",
            "some_future_field": {"nested": true}
        }))
        .unwrap();
        assert!(wire.pot.is_none());
        assert!(wire.player_cards.is_empty());
        assert_eq!(wire.game_message.as_deref(), Some("Your turn!"));
    }

    #[test]
    fn test_error_body_extraction() {
        let parsed: WireError = serde_json::from_str(r#"{"error": "Invalid raise amount"}"#).unwrap();
        assert_eq!(parsed.error, "Invalid raise amount");
    }
}
