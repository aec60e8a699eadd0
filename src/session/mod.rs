// src/session/mod.rs
// Session state model: owns the single source of truth for what the
// player can currently do, derived by replacing the snapshot wholesale
// on every engine response.

pub mod snapshot;

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::cards::CardSlot;
use crate::client::{ActionRequest, EngineClient, WireHandState};
use crate::error::SessionError;

pub use snapshot::{
    derive_legal_actions, parse_server_actions, validate_raise, ActionKind, Actor, HandSnapshot,
    LegalActions, Street, Winner,
};

/// Seconds a showdown reveal stays on screen when the engine does not
/// say otherwise.
const DEFAULT_SHOWDOWN_SECS: u32 = 5;

/// Most recent activity entries kept for display.
const ACTIVITY_LOG_CAP: usize = 10;

/// Where the session currently sits. Driven exclusively by applied
/// snapshots plus the showdown countdown; never advanced speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingPlayer,
    AwaitingOpponent,
    HandComplete,
    ShowdownCooldown,
}

/// The post-showdown reveal window. Countdown and revealed cards are one
/// unit: they appear together and clear together.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    pub remaining_secs: u32,
    pub opponent_cards: Vec<CardSlot>,
    pub winner: Option<Winner>,
}

/// Result of `start_new_hand`: blocked while the showdown cool-down is
/// live, otherwise the fresh snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum NewHandOutcome {
    Started(HandSnapshot),
    Blocked,
}

pub struct SessionStateModel {
    client: EngineClient,
    snapshot: Option<HandSnapshot>,
    phase: Phase,
    cooldown: Option<Cooldown>,
    activity_log: Vec<String>,
    busy: bool,
}

impl SessionStateModel {
    pub fn new(client: EngineClient) -> Self {
        Self {
            client,
            snapshot: None,
            phase: Phase::Idle,
            cooldown: None,
            activity_log: Vec::new(),
            busy: false,
        }
    }

    pub fn snapshot(&self) -> Option<&HandSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cooldown(&self) -> Option<&Cooldown> {
        self.cooldown.as_ref()
    }

    pub fn activity_log(&self) -> &[String] {
        &self.activity_log
    }

    /// Legality of the player's options against the current snapshot.
    pub fn legal_actions(&self) -> Option<LegalActions> {
        self.snapshot.as_ref().map(derive_legal_actions)
    }

    /// Joins (or rejoins) a session and adopts its current hand. A
    /// rejoin that lands mid-hand also records the already-revealed
    /// street so the log reads sensibly after a reconnect.
    pub async fn join(&mut self, session_id: &str) -> Result<HandSnapshot, SessionError> {
        self.begin()?;
        let result = self.client.join_game(session_id).await;
        self.finish();
        let snapshot = HandSnapshot::from(result?);

        info!(street = snapshot.street.label(), "joined session");
        self.push_activity("Hand started".to_string());
        if snapshot.street != Street::Preflop {
            self.push_activity(format!("{} revealed", snapshot.street.label()));
        }
        self.apply(snapshot.clone());
        Ok(snapshot)
    }

    /// Submits the player's action. Raises are validated client-side
    /// first and never sent when invalid; the engine stays the final
    /// authority and its rejection text is surfaced verbatim.
    pub async fn act(
        &mut self,
        session_id: &str,
        action: ActionRequest,
    ) -> Result<HandSnapshot, SessionError> {
        if self.cooldown.is_some() {
            return Err(SessionError::Validation(
                "hand is over; wait for the reveal to finish".to_string(),
            ));
        }
        let current = self.snapshot.as_ref().ok_or(SessionError::NoActiveHand)?;
        if let ActionRequest::Raise { to } = action {
            validate_raise(current, to)?;
        }

        self.begin()?;
        let result = self.client.make_move(session_id, &action).await;
        self.finish();
        Ok(self.apply_move_response(result?))
    }

    /// Starts the next hand, unless the showdown cool-down is still
    /// counting; in that case no request is made at all.
    pub async fn start_new_hand(&mut self, session_id: &str) -> Result<NewHandOutcome, SessionError> {
        if self.cooldown.is_some() {
            debug!("start_new_hand blocked by showdown cool-down");
            return Ok(NewHandOutcome::Blocked);
        }

        self.begin()?;
        let result = self.client.start_hand(session_id).await;
        self.finish();
        let snapshot = HandSnapshot::from(result?);

        self.push_activity("Hand started".to_string());
        self.apply(snapshot.clone());
        Ok(NewHandOutcome::Started(snapshot))
    }

    /// Advances the showdown countdown by one second. Returns true when
    /// this tick ended the cool-down (countdown and revealed cards clear
    /// together).
    pub fn tick_cooldown(&mut self) -> bool {
        let Some(cooldown) = self.cooldown.as_mut() else {
            return false;
        };
        cooldown.remaining_secs = cooldown.remaining_secs.saturating_sub(1);
        if cooldown.remaining_secs == 0 {
            self.clear_cooldown();
            return true;
        }
        false
    }

    /// Drives the countdown at a one-second cadence. This is the only
    /// timer in the model; dropping the future is the teardown path and
    /// leaves the cool-down cancellable via `cancel_cooldown`.
    pub async fn run_cooldown(&mut self) {
        while self.cooldown.is_some() {
            sleep(Duration::from_secs(1)).await;
            if self.tick_cooldown() {
                break;
            }
        }
    }

    /// External cancellation: clears the reveal window immediately.
    pub fn cancel_cooldown(&mut self) {
        if self.cooldown.is_some() {
            self.clear_cooldown();
        }
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if self.busy {
            warn!("rejected concurrent engine call");
            return Err(SessionError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    fn finish(&mut self) {
        self.busy = false;
    }

    /// Applies an act response: log entries, showdown cool-down arming,
    /// then wholesale snapshot replacement. Split from `act` so the
    /// response handling is testable without a live engine.
    fn apply_move_response(&mut self, wire: WireHandState) -> HandSnapshot {
        let street_changed = wire.street_changed.unwrap_or(false);
        let showdown = wire.showdown.unwrap_or(false);
        let duration = wire.showdown_duration.unwrap_or(DEFAULT_SHOWDOWN_SECS);
        let snapshot = HandSnapshot::from(wire);

        if street_changed {
            self.push_activity(format!("{} revealed", snapshot.street.label()));
        }
        if let Some(last) = &snapshot.last_action {
            self.push_activity(last.clone());
        }
        if snapshot.hand_complete {
            self.push_activity("Hand complete".to_string());
        }

        self.apply(snapshot.clone());

        if showdown {
            info!(duration, "showdown reveal");
            self.cooldown = Some(Cooldown {
                remaining_secs: duration.max(1),
                opponent_cards: snapshot.opponent_cards.clone(),
                winner: snapshot.winner,
            });
            self.phase = Phase::ShowdownCooldown;
        }

        snapshot
    }

    fn apply(&mut self, snapshot: HandSnapshot) {
        self.phase = if snapshot.hand_complete {
            Phase::HandComplete
        } else if snapshot.current_actor == Actor::Player {
            Phase::AwaitingPlayer
        } else {
            Phase::AwaitingOpponent
        };
        self.snapshot = Some(snapshot);
    }

    fn clear_cooldown(&mut self) {
        self.cooldown = None;
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.opponent_cards.clear();
        }
        self.phase = Phase::Idle;
        debug!("showdown cool-down cleared");
    }

    fn push_activity(&mut self, entry: String) {
        self.activity_log.push(entry);
        if self.activity_log.len() > ACTIVITY_LOG_CAP {
            self.activity_log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::EngineConfig;

    fn model() -> SessionStateModel {
        let config = EngineConfig::new("http://localhost:9", "test-token");
        SessionStateModel::new(EngineClient::new(config))
    }

    fn showdown_response() -> WireHandState {
        serde_json::from_value(serde_json::json!({
            "pot": 400,
            "player_stack": 9_800,
            "bot_stack": 9_800,
            "player_cards": ["Ah", "Kh"],
            "board_cards": ["Qh", "Jh", "Th", "2c", "2d"],
            "current_street": "river",
            "hand_complete": true,
            "showdown": true,
            "showdown_cards": {"opponent_cards": ["9c", "9d"]},
            "winner": "Player"
        }))
        .unwrap()
    }

    #[test]
    fn test_showdown_arms_five_second_cooldown() {
        let mut model = model();
        let snapshot = model.apply_move_response(showdown_response());

        assert!(snapshot.hand_complete);
        assert_eq!(model.phase(), Phase::ShowdownCooldown);
        let cooldown = model.cooldown().unwrap();
        assert_eq!(cooldown.remaining_secs, 5);
        assert_eq!(cooldown.opponent_cards.len(), 2);
        assert_eq!(cooldown.winner, Some(Winner::Player));
    }

    #[tokio::test]
    async fn test_start_new_hand_blocked_during_cooldown() {
        let mut model = model();
        model.apply_move_response(showdown_response());

        // Blocked before any network activity; the unroutable client
        // address would fail loudly if a request were attempted.
        let outcome = model.start_new_hand("session").await.unwrap();
        assert_eq!(outcome, NewHandOutcome::Blocked);
        assert_eq!(model.phase(), Phase::ShowdownCooldown);
    }

    #[test]
    fn test_cooldown_elapse_clears_reveal_with_it() {
        let mut model = model();
        model.apply_move_response(showdown_response());
        assert!(!model.snapshot().unwrap().opponent_cards.is_empty());

        for _ in 0..4 {
            assert!(!model.tick_cooldown());
        }
        assert!(model.tick_cooldown());

        assert!(model.cooldown().is_none());
        assert!(model.snapshot().unwrap().opponent_cards.is_empty());
        assert_eq!(model.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_act_blocked_during_cooldown() {
        let mut model = model();
        model.apply_move_response(showdown_response());
        let result = model.act("session", ActionRequest::Fold).await;
        assert!(matches!(result.unwrap_err(), SessionError::Validation(_)));
    }

    #[test]
    fn test_cancel_cooldown_clears_immediately() {
        let mut model = model();
        model.apply_move_response(showdown_response());
        model.cancel_cooldown();
        assert!(model.cooldown().is_none());
        assert!(model.snapshot().unwrap().opponent_cards.is_empty());
    }

    #[tokio::test]
    async fn test_act_without_join_is_rejected() {
        let mut model = model();
        let result = model.act("session", ActionRequest::Check).await;
        assert_eq!(result.unwrap_err(), SessionError::NoActiveHand);
    }

    #[tokio::test]
    async fn test_invalid_raise_never_reaches_the_network() {
        let mut model = model();
        let wire: WireHandState = serde_json::from_value(serde_json::json!({
            "player_stack": 9_800,
            "current_bet": 100,
            "player_current_bet": 0,
            "is_player_turn": true
        }))
        .unwrap();
        model.apply(HandSnapshot::from(wire));

        let result = model.act("session", ActionRequest::Raise { to: 150 }).await;
        assert!(matches!(result.unwrap_err(), SessionError::Validation(_)));
        // The guard was released: the model is not stuck busy.
        assert!(!model.busy);
    }

    #[test]
    fn test_busy_guard_rejects_second_call() {
        let mut model = model();
        model.begin().unwrap();
        assert_eq!(model.begin().unwrap_err(), SessionError::Busy);
        model.finish();
        assert!(model.begin().is_ok());
    }

    #[test]
    fn test_activity_log_caps_at_ten_entries() {
        let mut model = model();
        for i in 0..14 {
            model.push_activity(format!("entry {i}"));
        }
        assert_eq!(model.activity_log().len(), 10);
        assert_eq!(model.activity_log()[0], "entry 4");
        assert_eq!(model.activity_log()[9], "entry 13");
    }

    #[test]
    fn test_street_change_and_bot_action_are_logged() {
        let mut model = model();
        let wire: WireHandState = serde_json::from_value(serde_json::json!({
            "board_cards": ["Qh", "Jh", "Ts"],
            "current_street": "flop",
            "street_changed": true,
            "last_bot_action": "Bot called 100",
            "is_player_turn": true
        }))
        .unwrap();
        model.apply_move_response(wire);

        assert_eq!(model.activity_log(), &["Flop revealed", "Bot called 100"]);
        assert_eq!(model.phase(), Phase::AwaitingPlayer);
    }

    #[test]
    fn test_phase_follows_current_actor() {
        let mut model = model();
        let wire: WireHandState = serde_json::from_value(serde_json::json!({
            "is_player_turn": false
        }))
        .unwrap();
        model.apply(HandSnapshot::from(wire));
        assert_eq!(model.phase(), Phase::AwaitingOpponent);
    }
}
