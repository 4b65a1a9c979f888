//! Session phase definitions for the elimination FSM.
//!
//! Each phase type represents one stage of a session's lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle tag mirrored by the phase types below; this is what views,
/// events, and errors carry.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        };
        write!(f, "{repr}")
    }
}

/// Waiting for the driver to start; settings are adjustable
#[derive(Debug)]
pub struct NotStarted {}

/// Elimination in progress - the driver is expected to call step
#[derive(Debug)]
pub struct Running {}

/// Frozen mid-game; the same toggle that paused it resumes it
#[derive(Debug)]
pub struct Paused {}

/// One participant left; terminal until a reset
#[derive(Debug)]
pub struct Finished {}

/// Compile-time mapping from a phase type to its [`Phase`] tag.
pub trait PhaseTag {
    const PHASE: Phase;
}

impl PhaseTag for NotStarted {
    const PHASE: Phase = Phase::NotStarted;
}

impl PhaseTag for Running {
    const PHASE: Phase = Phase::Running;
}

impl PhaseTag for Paused {
    const PHASE: Phase = Phase::Paused;
}

impl PhaseTag for Finished {
    const PHASE: Phase = Phase::Finished;
}
