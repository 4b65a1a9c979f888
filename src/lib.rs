//! # Josephus
//!
//! A Josephus elimination game engine using a type-safe finite state
//! machine (FSM) design.
//!
//! This library provides the complete elimination core: a circular
//! roster of participants, the step-counting algorithm that eliminates
//! every k-th survivor, and the session lifecycle that lets an external
//! driver run the game turn by turn. The session is implemented as an
//! FSM using `enum_dispatch` for zero-cost trait dispatch.
//!
//! ## Architecture
//!
//! A session moves through four phases:
//!
//! - **NotStarted**: settings (participants, step count, speed) are
//!   adjustable; the circle is dealt for display
//! - **Running**: the driver advances the rotation one seat per call
//! - **Paused**: frozen mid-game; the pause toggle resumes
//! - **Finished**: one participant remains; terminal until a reset
//!
//! Rendering, console I/O, and wall-clock pacing are deliberately
//! absent: a presentation layer polls [`SessionStateManagement::snapshot`],
//! drains events, and calls [`JosephusState::step`] on its own schedule.
//!
//! ## Core Modules
//!
//! - [`game`]: entities, elimination engine, session state machine
//! - [`game::functional`]: pure batch solvers, no session required
//!
//! ## Example
//!
//! ```
//! use josephus::{JosephusState, Phase, SessionStateManagement, functional};
//!
//! // Interactive: drive a session turn by turn.
//! let mut session = JosephusState::new();
//! session.start().unwrap();
//! while session.phase() == Phase::Running {
//!     session.step();
//! }
//! assert_eq!(session.snapshot().survivor, Some(7));
//!
//! // Batch: solve outright.
//! let outcome = functional::solve(7, 2).unwrap();
//! assert_eq!(outcome.survivor, 7);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    EliminationEngine, JosephusState, Phase, SessionError, SessionEvent, SessionSettings,
    SessionStateManagement, SessionView,
    constants::{self, MAX_PARTICIPANTS, MAX_SPEED, MAX_STEP_COUNT, MIN_PARTICIPANTS, MIN_SPEED,
        MIN_STEP_COUNT},
    entities::{self, DEFAULT_PARTICIPANTS, DEFAULT_SPEED, DEFAULT_STEP_COUNT},
    functional,
};
