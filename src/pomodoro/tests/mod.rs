//! Unit tests for the pomodoro timer.

use crate::pomodoro::{Phase, PomodoroError, PomodoroSettings, PomodoroTimer, TickOutcome};
use crate::task::domain::ErrorKind;
use rstest::{fixture, rstest};

#[fixture]
fn timer() -> PomodoroTimer {
    PomodoroTimer::new(PomodoroSettings::default()).expect("default settings are valid")
}

fn short_settings() -> PomodoroSettings {
    PomodoroSettings {
        work_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 2,
        cycles_until_long_break: 2,
    }
}

/// Starts the timer and ticks until the phase completes.
fn run_phase(timer: &mut PomodoroTimer) -> TickOutcome {
    timer.toggle();
    for _ in 0..=timer.remaining_seconds() {
        let outcome = timer.tick();
        if matches!(outcome, TickOutcome::PhaseCompleted { .. }) {
            return outcome;
        }
    }
    panic!("phase did not complete");
}

#[rstest]
fn new_timer_is_stopped_at_a_full_work_phase(timer: PomodoroTimer) {
    assert_eq!(timer.phase(), Phase::Work);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_seconds(), 25 * 60);
    assert_eq!(timer.display(), "25:00");
    assert_eq!(timer.progress_percent(), 0);
}

#[rstest]
fn ticks_are_ignored_while_stopped(mut timer: PomodoroTimer) {
    assert_eq!(timer.tick(), TickOutcome::Idle);
    assert_eq!(timer.remaining_seconds(), 25 * 60);
}

#[rstest]
fn running_ticks_count_down(mut timer: PomodoroTimer) {
    timer.toggle();
    assert_eq!(
        timer.tick(),
        TickOutcome::Running {
            remaining_seconds: 25 * 60 - 1
        }
    );
    assert_eq!(timer.display(), "24:59");
    timer.toggle();
    assert_eq!(timer.tick(), TickOutcome::Idle);
}

#[rstest]
fn finished_work_switches_to_a_stopped_short_break() {
    let mut timer = PomodoroTimer::new(short_settings()).expect("valid settings");

    let outcome = run_phase(&mut timer);

    assert_eq!(
        outcome,
        TickOutcome::PhaseCompleted {
            finished: Phase::Work,
            next: Phase::ShortBreak
        }
    );
    assert!(!timer.is_running());
    assert_eq!(timer.completed_cycles(), 1);
    assert_eq!(timer.remaining_seconds(), 60);
}

#[rstest]
fn every_nth_work_phase_earns_a_long_break() {
    let mut timer = PomodoroTimer::new(short_settings()).expect("valid settings");

    run_phase(&mut timer);
    let back_to_work = run_phase(&mut timer);
    let long_break = run_phase(&mut timer);

    assert_eq!(
        back_to_work,
        TickOutcome::PhaseCompleted {
            finished: Phase::ShortBreak,
            next: Phase::Work
        }
    );
    assert_eq!(
        long_break,
        TickOutcome::PhaseCompleted {
            finished: Phase::Work,
            next: Phase::LongBreak
        }
    );
    assert_eq!(timer.completed_cycles(), 2);
    assert_eq!(timer.remaining_seconds(), 120);
    assert!(timer.phase().is_break());
}

#[rstest]
fn reset_restores_the_current_phase_duration() {
    let mut timer = PomodoroTimer::new(short_settings()).expect("valid settings");
    run_phase(&mut timer);
    run_phase(&mut timer);
    run_phase(&mut timer);
    timer.toggle();
    timer.tick();

    timer.reset();

    assert_eq!(timer.phase(), Phase::LongBreak);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_seconds(), 120);
}

#[rstest]
fn progress_tracks_elapsed_share_of_the_phase() {
    let mut timer = PomodoroTimer::new(short_settings()).expect("valid settings");
    timer.toggle();
    for _ in 0..15 {
        timer.tick();
    }
    assert_eq!(timer.progress_percent(), 25);
    assert_eq!(timer.display(), "00:45");
}

#[rstest]
fn settings_apply_immediately_while_stopped(mut timer: PomodoroTimer) {
    let settings = PomodoroSettings {
        work_minutes: 50,
        ..PomodoroSettings::default()
    };
    timer.update_settings(settings).expect("valid settings");
    assert_eq!(timer.remaining_seconds(), 50 * 60);
}

#[rstest]
fn settings_keep_a_running_countdown(mut timer: PomodoroTimer) {
    timer.toggle();
    timer.tick();
    let settings = PomodoroSettings {
        work_minutes: 50,
        ..PomodoroSettings::default()
    };
    timer.update_settings(settings).expect("valid settings");
    assert_eq!(timer.remaining_seconds(), 25 * 60 - 1);
    assert_eq!(timer.settings().work_minutes, 50);
}

#[rstest]
#[case(PomodoroSettings { work_minutes: 0, ..PomodoroSettings::default() }, "work_minutes")]
#[case(PomodoroSettings { short_break_minutes: 0, ..PomodoroSettings::default() }, "short_break_minutes")]
#[case(PomodoroSettings { long_break_minutes: 0, ..PomodoroSettings::default() }, "long_break_minutes")]
#[case(PomodoroSettings { cycles_until_long_break: 0, ..PomodoroSettings::default() }, "cycles_until_long_break")]
fn zero_settings_are_rejected(#[case] settings: PomodoroSettings, #[case] field: &str) {
    let mut timer = PomodoroTimer::new(PomodoroSettings::default()).expect("valid settings");

    let result = timer.update_settings(settings);

    assert!(matches!(result, Err(PomodoroError::ZeroSetting(name)) if name == field));
    assert_eq!(timer.settings(), &PomodoroSettings::default());
    assert!(PomodoroTimer::new(settings).is_err());
}

#[rstest]
fn invalid_settings_are_validation_errors() {
    assert_eq!(
        PomodoroError::ZeroSetting("work_minutes").kind(),
        ErrorKind::Validation
    );
}
