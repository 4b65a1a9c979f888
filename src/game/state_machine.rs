//! Elimination session state machine.
//!
//! This module contains the lifecycle FSM wrapped around one
//! [`EliminationEngine`]. It provides the session data structures, the
//! control surface a driver calls between frames, and the event queue a
//! presentation layer drains.

use enum_dispatch::enum_dispatch;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, mem};
use thiserror::Error;

use super::constants::{
    MAX_PARTICIPANTS, MAX_SPEED, MAX_STEP_COUNT, MIN_PARTICIPANTS, MIN_SPEED, MIN_STEP_COUNT,
};
use super::engine::EliminationEngine;
use super::entities::{
    DEFAULT_PARTICIPANTS, DEFAULT_SPEED, DEFAULT_STEP_COUNT, EliminationEvent, Participant,
    Position, Speed,
};
use super::states::{Finished, NotStarted, Paused, Phase, PhaseTag, Running};

/// Errors that can occur during session operations
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum SessionError {
    #[error("need at least one participant")]
    NotEnoughParticipants,
    #[error("step count must be at least 1")]
    ZeroStepCount,
    #[error("not allowed while the session is {0}")]
    InvalidPhase(Phase),
    #[error("can't seat {requested} participants (allowed {min} to {max})")]
    ParticipantsOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("can't count by {requested} (allowed {min} to {max})")]
    StepCountOutOfRange { requested: u32, min: u32, max: u32 },
    #[error("can't run at {requested}% speed (allowed {min}% to {max}%)")]
    SpeedOutOfRange {
        requested: Speed,
        min: Speed,
        max: Speed,
    },
}

/// Events that occur as a session advances
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SessionEvent {
    Eliminated(EliminationEvent),
    PhaseChanged(Phase),
    SurvivorFound(Position),
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Eliminated(event) => event.to_string(),
            Self::PhaseChanged(phase) => format!("session is now {phase}"),
            Self::SurvivorFound(position) => {
                format!("participant {position} outlasted the circle")
            }
        };
        write!(f, "{repr}")
    }
}

/// Session configuration settings
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionSettings {
    pub participants: usize,
    pub step_count: u32,
    pub speed: Speed,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICIPANTS, DEFAULT_STEP_COUNT, DEFAULT_SPEED)
    }
}

impl SessionSettings {
    #[must_use]
    pub const fn new(participants: usize, step_count: u32, speed: Speed) -> Self {
        Self {
            participants,
            step_count,
            speed,
        }
    }
}

/// Mutable session data shared across all phases
#[derive(Debug)]
pub struct SessionData {
    pub(super) settings: SessionSettings,
    /// Engine and circle for the current settings. Replaced wholesale on
    /// start, reset, and reconfiguration, never partially mutated.
    pub(super) engine: EliminationEngine,
    /// Stack of session events that give more insight as to what kind
    /// of updates occur due to driver commands or eliminations.
    pub(super) events: VecDeque<SessionEvent>,
}

impl Default for SessionData {
    fn default() -> Self {
        SessionSettings::default().into()
    }
}

/// Settings must already be within the session bounds; the session's
/// constructors and setters guarantee that.
impl From<SessionSettings> for SessionData {
    fn from(value: SessionSettings) -> Self {
        Self {
            engine: build_engine(&value),
            settings: value,
            events: VecDeque::new(),
        }
    }
}

impl SessionData {
    /// Deal a fresh circle from the current settings, discarding the old
    /// engine wholesale.
    fn rebuild(&mut self) {
        self.engine = build_engine(&self.settings);
    }

    fn push_event(&mut self, event: SessionEvent) {
        self.events.push_back(event);
    }

    fn transition_to(&mut self, phase: Phase) {
        info!("session is now {phase}");
        self.push_event(SessionEvent::PhaseChanged(phase));
    }
}

fn build_engine(settings: &SessionSettings) -> EliminationEngine {
    match EliminationEngine::new(settings.participants, settings.step_count) {
        Ok(engine) => engine,
        Err(err) => {
            error!("bounds-checked settings rejected by the engine: {err}");
            unreachable!("session settings are validated before they reach the engine");
        }
    }
}

fn validate_participants(participants: usize) -> Result<(), SessionError> {
    if (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participants) {
        Ok(())
    } else {
        Err(SessionError::ParticipantsOutOfRange {
            requested: participants,
            min: MIN_PARTICIPANTS,
            max: MAX_PARTICIPANTS,
        })
    }
}

fn validate_step_count(step_count: u32) -> Result<(), SessionError> {
    if (MIN_STEP_COUNT..=MAX_STEP_COUNT).contains(&step_count) {
        Ok(())
    } else {
        Err(SessionError::StepCountOutOfRange {
            requested: step_count,
            min: MIN_STEP_COUNT,
            max: MAX_STEP_COUNT,
        })
    }
}

fn validate_speed(speed: Speed) -> Result<(), SessionError> {
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(())
    } else {
        Err(SessionError::SpeedOutOfRange {
            requested: speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        })
    }
}

/// One elimination session with data and the current lifecycle phase.
#[derive(Debug)]
pub struct Session<T> {
    pub data: SessionData,
    pub state: T,
}

impl<T> Session<T> {
    /// Discard the engine and circle, restore default settings, and deal
    /// a fresh circle for display.
    fn into_not_started(self) -> Session<NotStarted> {
        let mut data = SessionData::default();
        data.transition_to(Phase::NotStarted);
        Session {
            data,
            state: NotStarted {},
        }
    }
}

/// Read-only view of a session for rendering or reporting.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionView {
    /// Everyone in the circle, in position order.
    pub participants: Vec<Participant>,
    pub phase: Phase,
    pub settings: SessionSettings,
    pub step_counter: u32,
    pub alive_count: usize,
    pub survivor: Option<Position>,
}

/// Trait for state access shared by every phase (views, events)
#[enum_dispatch]
pub trait SessionStateManagement {
    /// Drain queued events for the presentation layer.
    fn drain_events(&mut self) -> VecDeque<SessionEvent>;

    /// Read-only snapshot of the session. Side-effect free and safe to
    /// take at any time, including mid-frame while rendering.
    #[must_use]
    fn snapshot(&self) -> SessionView;

    fn phase(&self) -> Phase;

    fn settings(&self) -> SessionSettings;
}

impl<T: PhaseTag> SessionStateManagement for Session<T> {
    fn drain_events(&mut self) -> VecDeque<SessionEvent> {
        mem::take(&mut self.data.events)
    }

    fn snapshot(&self) -> SessionView {
        SessionView {
            participants: self.data.engine.participants(),
            phase: T::PHASE,
            settings: self.data.settings,
            step_counter: self.data.engine.step_counter(),
            alive_count: self.data.engine.alive_count(),
            survivor: self.data.engine.survivor(),
        }
    }

    fn phase(&self) -> Phase {
        T::PHASE
    }

    fn settings(&self) -> SessionSettings {
        self.data.settings
    }
}

impl From<Session<NotStarted>> for Session<Running> {
    fn from(mut value: Session<NotStarted>) -> Self {
        // Capture the settings as they stand and deal a fresh circle.
        value.data.rebuild();
        value.data.transition_to(Phase::Running);
        Self {
            data: value.data,
            state: Running {},
        }
    }
}

impl From<Session<Running>> for Session<Paused> {
    fn from(mut value: Session<Running>) -> Self {
        value.data.transition_to(Phase::Paused);
        Self {
            data: value.data,
            state: Paused {},
        }
    }
}

impl From<Session<Paused>> for Session<Running> {
    fn from(mut value: Session<Paused>) -> Self {
        value.data.transition_to(Phase::Running);
        Self {
            data: value.data,
            state: Running {},
        }
    }
}

impl From<Session<Running>> for Session<Finished> {
    fn from(mut value: Session<Running>) -> Self {
        if let Some(survivor) = value.data.engine.resolve_survivor() {
            info!("participant {survivor} outlasted the circle");
            value.data.push_event(SessionEvent::SurvivorFound(survivor));
        }
        value.data.transition_to(Phase::Finished);
        Self {
            data: value.data,
            state: Finished {},
        }
    }
}

/// A whole elimination session across its lifecycle. This is the value a
/// driver owns: it starts in [`Phase::NotStarted`] with default settings
/// and moves between phases as control commands come in.
#[enum_dispatch(SessionStateManagement)]
#[derive(Debug)]
pub enum JosephusState {
    NotStarted(Session<NotStarted>),
    Running(Session<Running>),
    Paused(Session<Paused>),
    Finished(Session<Finished>),
}

impl Default for JosephusState {
    fn default() -> Self {
        Self::new()
    }
}

impl JosephusState {
    /// A fresh session with default settings, waiting to be started.
    #[must_use]
    pub fn new() -> Self {
        Self::NotStarted(Session {
            data: SessionData::default(),
            state: NotStarted {},
        })
    }

    /// A fresh session with the given settings.
    ///
    /// # Errors
    ///
    /// Each setting is checked against the session bounds; out-of-range
    /// values are rejected, never clamped.
    pub fn with_settings(settings: SessionSettings) -> Result<Self, SessionError> {
        validate_participants(settings.participants)?;
        validate_step_count(settings.step_count)?;
        validate_speed(settings.speed)?;
        Ok(Self::NotStarted(Session {
            data: settings.into(),
            state: NotStarted {},
        }))
    }

    /// Freeze the current settings and begin eliminating.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::InvalidPhase`] unless the session has
    /// not started yet.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match mem::take(self) {
            Self::NotStarted(session) => {
                *self = Self::Running(Session::<Running>::from(session));
                Ok(())
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(SessionError::InvalidPhase(phase))
            }
        }
    }

    /// Freeze a running game, or resume a paused one.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::InvalidPhase`] unless the session is
    /// running or paused.
    pub fn toggle_pause(&mut self) -> Result<(), SessionError> {
        match mem::take(self) {
            Self::Running(session) => {
                *self = Self::Paused(Session::<Paused>::from(session));
                Ok(())
            }
            Self::Paused(session) => {
                *self = Self::Running(Session::<Running>::from(session));
                Ok(())
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(SessionError::InvalidPhase(phase))
            }
        }
    }

    /// Discard the game and return to a not-started session with default
    /// settings. Valid in every phase.
    pub fn reset(&mut self) {
        *self = match mem::take(self) {
            Self::NotStarted(session) => Self::NotStarted(session.into_not_started()),
            Self::Running(session) => Self::NotStarted(session.into_not_started()),
            Self::Paused(session) => Self::NotStarted(session.into_not_started()),
            Self::Finished(session) => Self::NotStarted(session.into_not_started()),
        };
    }

    /// Change how many participants are seated. Reseats the display
    /// circle at the new size.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionError::InvalidPhase`] once the session has
    /// started, and with [`SessionError::ParticipantsOutOfRange`] for a
    /// value outside the session bounds (rejected, not clamped).
    pub fn set_participants(&mut self, participants: usize) -> Result<(), SessionError> {
        let phase = self.phase();
        let Self::NotStarted(session) = self else {
            return Err(SessionError::InvalidPhase(phase));
        };
        validate_participants(participants)?;
        session.data.settings.participants = participants;
        session.data.rebuild();
        Ok(())
    }

    /// Change which count eliminates.
    ///
    /// # Errors
    ///
    /// Same phase and range rules as
    /// [`set_participants`](Self::set_participants).
    pub fn set_step_count(&mut self, step_count: u32) -> Result<(), SessionError> {
        let phase = self.phase();
        let Self::NotStarted(session) = self else {
            return Err(SessionError::InvalidPhase(phase));
        };
        validate_step_count(step_count)?;
        session.data.settings.step_count = step_count;
        session.data.rebuild();
        Ok(())
    }

    /// Change the stored playback speed. The core only bounds and stores
    /// it; the driver decides what it means in wall-clock terms.
    ///
    /// # Errors
    ///
    /// Same phase and range rules as
    /// [`set_participants`](Self::set_participants).
    pub fn set_speed(&mut self, speed: Speed) -> Result<(), SessionError> {
        let phase = self.phase();
        let Self::NotStarted(session) = self else {
            return Err(SessionError::InvalidPhase(phase));
        };
        validate_speed(speed)?;
        session.data.settings.speed = speed;
        Ok(())
    }

    /// Advance the rotation by one participant.
    ///
    /// Returns the elimination event if this visit eliminated someone,
    /// and `None` otherwise. Outside [`Phase::Running`] this is a no-op
    /// returning `None`. The session moves to [`Phase::Finished`] the
    /// instant one participant remains.
    pub fn step(&mut self) -> Option<EliminationEvent> {
        let Self::Running(session) = self else {
            return None;
        };
        let event = session.data.engine.step();
        if let Some(event) = event {
            session.data.push_event(SessionEvent::Eliminated(event));
        }
        if session.data.engine.is_solved() {
            if let Self::Running(session) = mem::take(self) {
                *self = Self::Finished(Session::<Finished>::from(session));
            }
        }
        event
    }
}
