//! Pomodoro timer state machine.

use super::{PomodoroError, PomodoroSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work.
    Work,
    /// Break between work phases.
    ShortBreak,
    /// Break after every `cycles_until_long_break` work phases.
    LongBreak,
}

impl Phase {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Returns `true` for either break.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    const fn minutes(self, settings: &PomodoroSettings) -> u32 {
        match self {
            Self::Work => settings.work_minutes,
            Self::ShortBreak => settings.short_break_minutes,
            Self::LongBreak => settings.long_break_minutes,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a one-second [`PomodoroTimer::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is stopped; nothing changed.
    Idle,
    /// One second elapsed.
    Running {
        /// Seconds left in the phase.
        remaining_seconds: u32,
    },
    /// The phase ran out and the timer stopped at the start of the next.
    PhaseCompleted {
        /// The phase that ended.
        finished: Phase,
        /// The phase now loaded.
        next: Phase,
    },
}

/// Countdown through work phases and breaks.
///
/// The timer is advanced by calling [`Self::tick`] once per second; it never
/// reads a clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    phase: Phase,
    remaining_seconds: u32,
    running: bool,
    completed_cycles: u32,
}

impl PomodoroTimer {
    /// Creates a stopped timer at the start of a work phase.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::ZeroSetting`] for invalid settings.
    pub fn new(settings: PomodoroSettings) -> Result<Self, PomodoroError> {
        settings.validate()?;
        Ok(Self {
            settings,
            phase: Phase::Work,
            remaining_seconds: seconds(Phase::Work.minutes(&settings)),
            running: false,
            completed_cycles: 0,
        })
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Returns `true` while counting down.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the number of finished work phases.
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Starts or pauses the countdown.
    pub const fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stops the countdown and restores the full duration of the phase.
    pub const fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.phase_seconds();
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Running {
                remaining_seconds: self.remaining_seconds,
            };
        }

        let finished = self.phase;
        let next = if finished == Phase::Work {
            self.completed_cycles = self.completed_cycles.saturating_add(1);
            let long_break_due = self
                .completed_cycles
                .checked_rem(self.settings.cycles_until_long_break)
                == Some(0);
            if long_break_due {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            }
        } else {
            Phase::Work
        };

        self.phase = next;
        self.running = false;
        self.remaining_seconds = self.phase_seconds();
        TickOutcome::PhaseCompleted { finished, next }
    }

    /// Replaces the settings.
    ///
    /// While stopped, the remaining time is reset to the new duration of the
    /// current phase; a running countdown keeps its remaining time.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::ZeroSetting`] for invalid settings; the timer
    /// is left unchanged.
    pub fn update_settings(&mut self, settings: PomodoroSettings) -> Result<(), PomodoroError> {
        settings.validate()?;
        self.settings = settings;
        if !self.running {
            self.remaining_seconds = self.phase_seconds();
        }
        Ok(())
    }

    /// Returns how much of the current phase has elapsed, from 0 to 100.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.phase_seconds();
        let elapsed = total.saturating_sub(self.remaining_seconds);
        elapsed
            .saturating_mul(100)
            .checked_div(total)
            .unwrap_or(0)
            .min(100)
    }

    /// Formats the remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        let minutes = self.remaining_seconds.checked_div(60).unwrap_or(0);
        let secs = self.remaining_seconds.checked_rem(60).unwrap_or(0);
        format!("{minutes:02}:{secs:02}")
    }

    const fn phase_seconds(&self) -> u32 {
        seconds(self.phase.minutes(&self.settings))
    }
}

const fn seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(60)
}
