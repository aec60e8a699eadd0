// src/error.rs
// Failure taxonomy for the session core. Everything is returned as a
// value; messages are fit to show to the player verbatim.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Transport failure: no usable response from the engine.
    #[error("engine unreachable: {0}")]
    Connection(String),

    /// The engine answered non-2xx; `message` is the server's own
    /// explanation, passed through unreinterpreted.
    #[error("{message}")]
    EngineRejected { status: u16, message: String },

    /// Client-side pre-check failed; the request was never sent.
    #[error("{0}")]
    Validation(String),

    /// A state-mutating engine call is already in flight for this session.
    #[error("another request is already in flight")]
    Busy,

    /// No successful join yet; there is no hand to act on.
    #[error("no active hand; join a session first")]
    NoActiveHand,
}

impl SessionError {
    /// Join/act failures are retryable by the user; validation and guard
    /// rejections are not (the input or timing has to change first).
    pub fn is_retryable(&self) -> bool {
        matches!(self, SessionError::Connection(_) | SessionError::EngineRejected { .. })
    }
}
