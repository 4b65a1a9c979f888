//! The step-counting elimination algorithm over one [`Circle`].
//!
//! The engine exposes both a single-step interface for interactive
//! drivers and a run-to-completion interface for batch callers. Output
//! is a pure function of the participant count and the step count; there
//! is no randomness anywhere in here.

use log::{debug, error};

use super::entities::{Circle, EliminationEvent, Participant, Position};
use super::state_machine::SessionError;

/// Runs one elimination game over one circle, which it owns exclusively.
///
/// Dead participants are never removed from the circle; they pass through
/// the rotation without touching the step counter, so the counting order
/// of the survivors stays exactly as it was at creation.
#[derive(Debug)]
pub struct EliminationEngine {
    circle: Circle,
    /// The configured `k`: every k-th alive participant is eliminated.
    step_count: u32,
    /// Alive participants visited since the last elimination (or since
    /// the start). Resets to 1 immediately after each elimination.
    step_counter: u32,
    alive_count: usize,
    elimination_order: Vec<Position>,
    survivor: Option<Position>,
}

impl EliminationEngine {
    /// Seat `participants` people and prepare to count by `step_count`.
    ///
    /// # Errors
    ///
    /// Rejects a circle with nobody in it and a step count of zero. A
    /// single participant is accepted: that game is already solved, with
    /// nobody to eliminate.
    pub fn new(participants: usize, step_count: u32) -> Result<Self, SessionError> {
        if participants < 1 {
            return Err(SessionError::NotEnoughParticipants);
        }
        if step_count < 1 {
            return Err(SessionError::ZeroStepCount);
        }
        Ok(Self {
            circle: Circle::new(participants),
            step_count,
            step_counter: 1,
            alive_count: participants,
            elimination_order: Vec::with_capacity(participants.saturating_sub(1)),
            survivor: None,
        })
    }

    /// Visit the next participant in the rotation.
    ///
    /// Dead participants pass through unchanged. An alive participant
    /// either bumps the step counter or, on the k-th visit, is marked
    /// dead and reported as an [`EliminationEvent`]. Either way the
    /// participant goes back to the rear of the rotation, so one call is
    /// atomic with respect to the circle. Once the game is solved this
    /// is a no-op.
    pub fn step(&mut self) -> Option<EliminationEvent> {
        if self.is_solved() {
            return None;
        }
        let Some(mut participant) = self.circle.advance_one() else {
            error!(
                "circle drained while {} participants are still alive",
                self.alive_count
            );
            unreachable!("every visited participant is requeued, so the circle can't drain");
        };
        let mut event = None;
        if participant.alive {
            if self.step_counter == self.step_count {
                participant.alive = false;
                self.alive_count -= 1;
                self.step_counter = 1;
                self.elimination_order.push(participant.position);
                debug!(
                    "participant {} eliminated, {} remain",
                    participant.position, self.alive_count
                );
                event = Some(EliminationEvent {
                    position: participant.position,
                    remaining_alive: self.alive_count,
                });
            } else {
                self.step_counter += 1;
            }
        }
        self.circle.requeue(participant);
        event
    }

    /// Step until one participant remains, then fix the survivor.
    /// Returns every elimination event in chronological order.
    pub fn run_to_completion(&mut self) -> Vec<EliminationEvent> {
        let mut events = Vec::with_capacity(self.alive_count.saturating_sub(1));
        while !self.is_solved() {
            if let Some(event) = self.step() {
                events.push(event);
            }
        }
        self.resolve_survivor();
        events
    }

    /// Scan the circle for the one alive participant and record them as
    /// the survivor. Drains and restores the full rotation, so every
    /// original seat is still in place afterwards. Returns `None` while
    /// more than one participant is alive (the survivor is undefined
    /// until then).
    pub fn resolve_survivor(&mut self) -> Option<Position> {
        if self.survivor.is_some() {
            return self.survivor;
        }
        if !self.is_solved() {
            return None;
        }
        let mut drained = Vec::with_capacity(self.circle.len());
        while let Some(participant) = self.circle.advance_one() {
            drained.push(participant);
        }
        for participant in drained {
            if participant.alive {
                self.survivor = Some(participant.position);
            }
            self.circle.requeue(participant);
        }
        self.survivor
    }

    /// Whether at most one participant is left alive.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.alive_count <= 1
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    #[must_use]
    pub fn step_counter(&self) -> u32 {
        self.step_counter
    }

    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Positions eliminated so far, oldest first.
    #[must_use]
    pub fn elimination_order(&self) -> &[Position] {
        &self.elimination_order
    }

    /// The last participant standing, once resolved.
    #[must_use]
    pub fn survivor(&self) -> Option<Position> {
        self.survivor
    }

    /// Everyone in the circle in position order, for views.
    #[must_use]
    pub fn participants(&self) -> Vec<Participant> {
        self.circle.participants()
    }
}
