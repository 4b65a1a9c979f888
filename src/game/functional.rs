//! Pure, session-free solvers.
//!
//! Batch callers that only want the answer come through here; nothing in
//! this module touches session state or performs I/O.

use serde::{Deserialize, Serialize};

use super::engine::EliminationEngine;
use super::entities::Position;
use super::state_machine::SessionError;

/// The complete outcome of one elimination game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Outcome {
    /// Positions in the order they were eliminated.
    pub elimination_order: Vec<Position>,
    pub survivor: Position,
}

/// Run a full elimination game for `participants` people counting by
/// `step_count`, reporting the elimination order and the survivor.
///
/// The result is a pure function of the two inputs. A single participant
/// is a valid (if trivial) game: nobody is eliminated and they survive.
///
/// # Errors
///
/// Rejects `participants < 1` and `step_count < 1`.
pub fn solve(participants: usize, step_count: u32) -> Result<Outcome, SessionError> {
    let mut engine = EliminationEngine::new(participants, step_count)?;
    let events = engine.run_to_completion();
    let Some(survivor) = engine.survivor() else {
        unreachable!("a solved game with at least one participant always has a survivor");
    };
    Ok(Outcome {
        elimination_order: events.into_iter().map(|event| event.position).collect(),
        survivor,
    })
}

/// Survivor of the classical Josephus recurrence, without simulating the
/// circle: J(1) = 0, J(n) = (J(n - 1) + k) mod n, returned 1-based.
///
/// Agrees with [`solve`] on the survivor for every valid input and runs
/// in O(n) with no allocation, which makes it handy as an oracle and as
/// a fast path when the elimination order doesn't matter.
///
/// # Errors
///
/// Rejects `participants < 1` and `step_count < 1`.
pub fn classical_survivor(participants: usize, step_count: u32) -> Result<Position, SessionError> {
    if participants < 1 {
        return Err(SessionError::NotEnoughParticipants);
    }
    if step_count < 1 {
        return Err(SessionError::ZeroStepCount);
    }
    let step_count = step_count as usize;
    let mut survivor = 0;
    for alive in 2..=participants {
        survivor = (survivor + step_count) % alive;
    }
    Ok(survivor + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_seven_by_two() {
        let outcome = solve(7, 2).unwrap();
        assert_eq!(outcome.elimination_order, vec![2, 4, 6, 1, 5, 3]);
        assert_eq!(outcome.survivor, 7);
    }

    #[test]
    fn test_solve_five_by_three() {
        let outcome = solve(5, 3).unwrap();
        assert_eq!(outcome.elimination_order, vec![3, 1, 5, 2]);
        assert_eq!(outcome.survivor, 4);
    }

    #[test]
    fn test_solve_single_participant() {
        let outcome = solve(1, 9).unwrap();
        assert!(outcome.elimination_order.is_empty());
        assert_eq!(outcome.survivor, 1);
    }

    #[test]
    fn test_solve_rejects_invalid_input() {
        assert_eq!(solve(0, 2).unwrap_err(), SessionError::NotEnoughParticipants);
        assert_eq!(solve(5, 0).unwrap_err(), SessionError::ZeroStepCount);
    }

    #[test]
    fn test_classical_survivor_matches_known_results() {
        assert_eq!(classical_survivor(7, 2).unwrap(), 7);
        assert_eq!(classical_survivor(5, 3).unwrap(), 4);
        assert_eq!(classical_survivor(1, 1).unwrap(), 1);
        // The textbook case: 41 soldiers counting by 3.
        assert_eq!(classical_survivor(41, 3).unwrap(), 31);
    }

    #[test]
    fn test_classical_survivor_rejects_invalid_input() {
        assert_eq!(
            classical_survivor(0, 2).unwrap_err(),
            SessionError::NotEnoughParticipants
        );
        assert_eq!(
            classical_survivor(3, 0).unwrap_err(),
            SessionError::ZeroStepCount
        );
    }

    #[test]
    fn test_solve_is_deterministic() {
        assert_eq!(solve(13, 4).unwrap(), solve(13, 4).unwrap());
    }
}
