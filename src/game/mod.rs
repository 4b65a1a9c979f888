//! Elimination game engine - core FSM and game logic.
//!
//! This module provides the foundational elimination implementation:
//! - The circular roster of participants and its rotation rules
//! - The step-counting elimination engine
//! - The session lifecycle state machine and its control surface
//! - Event generation and read-only views

// Submodules
pub mod constants;
pub mod entities;
pub mod functional;
pub mod states;

mod engine;
mod state_machine;

pub use engine::EliminationEngine;
pub use state_machine::{
    JosephusState, Session, SessionData, SessionError, SessionEvent, SessionSettings,
    SessionStateManagement, SessionView,
};
pub use states::{Phase, PhaseTag};
