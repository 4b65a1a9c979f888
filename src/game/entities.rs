use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};

/// Type alias for a participant's place in the circle. Positions are
/// 1-based, assigned in roster order at creation, and never reused.
pub type Position = usize;

/// Type alias for playback speed as a whole percentage of the driver's
/// base cadence (there's no point arguing over fractions of a percent).
/// The core only stores and bounds it; mapping it to wall-clock time is
/// the presentation layer's job.
pub type Speed = u32;

pub const DEFAULT_PARTICIPANTS: usize = 7;
pub const DEFAULT_STEP_COUNT: u32 = 2;
pub const DEFAULT_SPEED: Speed = 100;

/// One person in the circle. `alive` flips to `false` exactly once and
/// never reverts; eliminated participants keep their seat so the counting
/// order stays intact.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Participant {
    pub position: Position,
    pub alive: bool,
}

impl Participant {
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.alive { "alive" } else { "eliminated" };
        write!(f, "{} ({status})", self.position)
    }
}

/// The circle of participants, realized as a FIFO queue. Dequeuing the
/// front and re-enqueuing at the back walks the circle one seat at a
/// time while preserving relative order indefinitely.
#[derive(Debug)]
pub struct Circle {
    seats: VecDeque<Participant>,
}

impl Circle {
    /// Seat `participants` people at positions `1..=participants`, all alive.
    #[must_use]
    pub fn new(participants: usize) -> Self {
        Self {
            seats: (1..=participants).map(Participant::new).collect(),
        }
    }

    /// Remove and return the participant at the front of the rotation.
    /// The caller decides whether to [`requeue`](Self::requeue) them.
    pub fn advance_one(&mut self) -> Option<Participant> {
        self.seats.pop_front()
    }

    /// Append a participant (dead or alive) to the back of the rotation.
    pub fn requeue(&mut self, participant: Participant) {
        self.seats.push_back(participant);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Everyone in the circle, sorted by position rather than by the
    /// current rotation order.
    #[must_use]
    pub fn participants(&self) -> Vec<Participant> {
        let mut listing: Vec<Participant> = self.seats.iter().copied().collect();
        listing.sort_by_key(|participant| participant.position);
        listing
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .seats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{repr}")
    }
}

/// The record of one participant being marked dead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EliminationEvent {
    pub position: Position,
    /// How many participants are still alive after this elimination.
    pub remaining_alive: usize,
}

impl fmt::Display for EliminationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "participant {} eliminated, {} remain",
            self.position, self.remaining_alive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Participant Tests ===

    #[test]
    fn test_participant_starts_alive() {
        let participant = Participant::new(4);
        assert_eq!(participant.position, 4);
        assert!(participant.alive);
    }

    #[test]
    fn test_participant_display() {
        let mut participant = Participant::new(2);
        assert_eq!(participant.to_string(), "2 (alive)");
        participant.alive = false;
        assert_eq!(participant.to_string(), "2 (eliminated)");
    }

    // === Circle Tests ===

    #[test]
    fn test_circle_creation_order() {
        let mut circle = Circle::new(5);
        assert_eq!(circle.len(), 5);
        for expected in 1..=5 {
            let participant = circle.advance_one().unwrap();
            assert_eq!(participant.position, expected);
            assert!(participant.alive);
        }
        assert!(circle.is_empty());
    }

    #[test]
    fn test_circle_rotation_preserves_relative_order() {
        let mut circle = Circle::new(4);
        let front = circle.advance_one().unwrap();
        circle.requeue(front);

        let order: Vec<Position> = std::iter::from_fn(|| circle.advance_one())
            .map(|participant| participant.position)
            .collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_circle_keeps_dead_participants() {
        let mut circle = Circle::new(3);
        let mut first = circle.advance_one().unwrap();
        first.alive = false;
        circle.requeue(first);

        assert_eq!(circle.len(), 3);
        let listing = circle.participants();
        assert!(!listing[0].alive);
        assert!(listing[1].alive && listing[2].alive);
    }

    #[test]
    fn test_circle_participants_sorted_by_position() {
        let mut circle = Circle::new(4);
        // Rotate twice so internal order is 3, 4, 1, 2.
        for _ in 0..2 {
            let front = circle.advance_one().unwrap();
            circle.requeue(front);
        }
        let positions: Vec<Position> = circle
            .participants()
            .iter()
            .map(|participant| participant.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_circle() {
        let mut circle = Circle::new(0);
        assert!(circle.is_empty());
        assert!(circle.advance_one().is_none());
    }

    #[test]
    fn test_circle_display_follows_rotation() {
        let mut circle = Circle::new(3);
        let front = circle.advance_one().unwrap();
        circle.requeue(front);
        assert_eq!(circle.to_string(), "2 (alive) -> 3 (alive) -> 1 (alive)");
    }

    // === EliminationEvent Tests ===

    #[test]
    fn test_elimination_event_display() {
        let event = EliminationEvent {
            position: 3,
            remaining_alive: 4,
        };
        assert_eq!(event.to_string(), "participant 3 eliminated, 4 remain");
    }
}
