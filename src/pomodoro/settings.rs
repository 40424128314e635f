//! Timer durations.

use super::PomodoroError;
use serde::{Deserialize, Serialize};

/// Durations and cadence of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroSettings {
    /// Length of a work phase in minutes.
    pub work_minutes: u32,
    /// Length of a short break in minutes.
    pub short_break_minutes: u32,
    /// Length of a long break in minutes.
    pub long_break_minutes: u32,
    /// Number of completed work phases between long breaks.
    pub cycles_until_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            cycles_until_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    /// Checks that every duration and the cadence are at least one.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::ZeroSetting`] naming the first zero field.
    pub const fn validate(&self) -> Result<(), PomodoroError> {
        if self.work_minutes == 0 {
            return Err(PomodoroError::ZeroSetting("work_minutes"));
        }
        if self.short_break_minutes == 0 {
            return Err(PomodoroError::ZeroSetting("short_break_minutes"));
        }
        if self.long_break_minutes == 0 {
            return Err(PomodoroError::ZeroSetting("long_break_minutes"));
        }
        if self.cycles_until_long_break == 0 {
            return Err(PomodoroError::ZeroSetting("cycles_until_long_break"));
        }
        Ok(())
    }
}
