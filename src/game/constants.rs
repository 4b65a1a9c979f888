//! Configuration bounds for interactive sessions.
//!
//! The elimination algorithm itself has no ceiling on either value; these
//! bounds only govern what a session accepts from its driver.

/// Fewest participants an interactive session will accept.
pub const MIN_PARTICIPANTS: usize = 3;

/// Most participants an interactive session will accept.
pub const MAX_PARTICIPANTS: usize = 20;

/// Smallest step count. Counting by one eliminates every participant in turn.
pub const MIN_STEP_COUNT: u32 = 1;

/// Largest step count an interactive session will accept.
pub const MAX_STEP_COUNT: u32 = 10;

/// Slowest playback speed, as a whole percentage of the driver's base cadence.
pub const MIN_SPEED: u32 = 10;

/// Fastest playback speed.
pub const MAX_SPEED: u32 = 180;
