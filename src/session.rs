//! One-directional state machine for an analysis run

use crate::error::{Result, ResumeFitError};
use std::fmt;

/// Stages of a single user-facing run, in order. There are no backward
/// transitions and no cancellation; a declined payment simply leaves the
/// session parked in `CoverLetterRequested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InputsReady,
    Analyzed,
    CoverLetterRequested,
    PaymentConfirmed,
    LetterGenerated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "Idle",
            SessionState::InputsReady => "InputsReady",
            SessionState::Analyzed => "Analyzed",
            SessionState::CoverLetterRequested => "CoverLetterRequested",
            SessionState::PaymentConfirmed => "PaymentConfirmed",
            SessionState::LetterGenerated => "LetterGenerated",
        };
        f.write_str(name)
    }
}

/// Tracks where a run is in the flow, rejecting out-of-order transitions.
/// Transitions happen when external events land (inputs read, analysis
/// done, letter requested, payment confirmed).
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn inputs_ready(&mut self) -> Result<()> {
        self.advance(SessionState::Idle, SessionState::InputsReady)
    }

    pub fn analyzed(&mut self) -> Result<()> {
        self.advance(SessionState::InputsReady, SessionState::Analyzed)
    }

    pub fn request_cover_letter(&mut self) -> Result<()> {
        self.advance(SessionState::Analyzed, SessionState::CoverLetterRequested)
    }

    pub fn payment_confirmed(&mut self) -> Result<()> {
        self.advance(
            SessionState::CoverLetterRequested,
            SessionState::PaymentConfirmed,
        )
    }

    pub fn letter_generated(&mut self) -> Result<()> {
        self.advance(SessionState::PaymentConfirmed, SessionState::LetterGenerated)
    }

    fn advance(&mut self, expected: SessionState, next: SessionState) -> Result<()> {
        if self.state != expected {
            return Err(ResumeFitError::InvalidTransition(format!(
                "cannot move to {} from {}",
                next, self.state
            )));
        }
        self.state = next;
        Ok(())
    }
}
