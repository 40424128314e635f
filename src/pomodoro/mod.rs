//! Pomodoro focus timer shown next to the board.
//!
//! [`PomodoroTimer`] is a pure state machine driven by one-second ticks, so
//! the caller owns scheduling and the timer stays deterministic under test.

mod settings;
mod timer;

pub use settings::PomodoroSettings;
pub use timer::{Phase, PomodoroTimer, TickOutcome};

use crate::task::domain::ErrorKind;
use thiserror::Error;

/// Errors returned by timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PomodoroError {
    /// A duration or the long-break cadence is zero.
    #[error("pomodoro setting must be at least 1: {0}")]
    ZeroSetting(&'static str),
}

impl PomodoroError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroSetting(_) => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests;
