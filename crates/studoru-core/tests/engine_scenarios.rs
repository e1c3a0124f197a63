//! End-to-end scenarios for the timer engine and its analytics.
//!
//! These tests drive the full stack -- countdown, recording, stores --
//! against temporary files and a pinned clock.

use chrono::TimeZone;
use studoru_core::{
    schedule, Event, FixedClock, Phase, ScheduleCatalog, ScheduleEntry, SessionRecorder,
    StatsStore, TimeUnit, TimerConfig, TimerEngine, ValidationError,
};

fn secs_config(work: u32, break_: u32) -> TimerConfig {
    TimerConfig {
        work_duration: work,
        break_duration: break_,
        target_minutes: 120,
        unit: TimeUnit::Seconds,
    }
}

fn engine_at(dir: &tempfile::TempDir, config: &TimerConfig) -> TimerEngine<FixedClock> {
    let store = StatsStore::open(dir.path().join("stats.json"));
    let at = chrono::Local.with_ymd_and_hms(2026, 3, 9, 9, 0, 0).unwrap();
    TimerEngine::new(config, SessionRecorder::with_clock(store, FixedClock(at)))
}

#[test]
fn one_second_work_phase_completes_and_records() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(1, 1);
    let mut engine = engine_at(&dir, &config);

    engine.start(&config).unwrap();
    let event = engine.tick(&config).unwrap();

    assert!(matches!(event, Event::WorkPhaseComplete { focus_secs: 1, .. }));
    assert_eq!(engine.phase_clock().phase(), Phase::Break);
    let today = engine.recorder().today();
    assert_eq!(today.sessions, 1);
    assert_eq!(today.total_focus_secs, 1);
}

#[test]
fn start_then_stop_leaves_stats_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(25, 5);
    let mut engine = engine_at(&dir, &config);

    engine.start(&config).unwrap();
    engine.stop();

    let today = engine.recorder().today();
    assert_eq!(today.sessions, 0);
    assert_eq!(today.total_focus_secs, 0);
    assert!(today.details.is_empty());
    // nothing was appended, so nothing was made durable either
    assert!(engine.recorder().store().days().is_empty());
}

#[test]
fn blank_preset_name_is_rejected_and_catalog_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = ScheduleCatalog::open(dir.path().join("schedule.json"));
    catalog.add(ScheduleEntry::new("Existing", 25, 5)).unwrap();

    let err = catalog.add(ScheduleEntry::new("", 50, 10)).unwrap_err();
    assert!(matches!(err, ValidationError::EmptyField { .. }));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn two_full_cycles_record_exactly_two_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(2, 1);
    let mut engine = engine_at(&dir, &config);
    engine.start(&config).unwrap();

    let mut work_completions = 0;
    let mut break_completions = 0;
    for _ in 0..6 {
        match engine.tick(&config) {
            Some(Event::WorkPhaseComplete { .. }) => work_completions += 1,
            Some(Event::BreakPhaseComplete { .. }) => break_completions += 1,
            _ => {}
        }
    }

    assert_eq!(work_completions, 2);
    assert_eq!(break_completions, 2);
    let today = engine.recorder().today();
    assert_eq!(today.sessions, 2);
    assert_eq!(today.total_focus_secs, 4);
}

#[test]
fn target_ratio_is_clamped_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = StatsStore::open(dir.path().join("stats.json"));
    // 120 minutes of focus
    store.append("2026-03-09", 7200, "12:00".into());

    let day = store.day("2026-03-09").unwrap();
    assert_eq!(day.target_progress_ratio(120), 1.0);
    assert_eq!(day.target_progress_ratio(60), 1.0);
}

#[test]
fn mid_run_edit_seeds_next_phase_but_not_current_countdown() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(3, 2);
    let mut engine = engine_at(&dir, &config);
    engine.start(&config).unwrap();
    engine.tick(&config);
    assert_eq!(engine.phase_clock().remaining_secs(), 2);

    // the user widens the work duration while the countdown runs
    let edited = secs_config(30, 8);
    match engine.tick(&edited) {
        Some(Event::Tick {
            remaining_secs,
            total_secs,
            ..
        }) => {
            // countdown untouched, bar maximum rescaled
            assert_eq!(remaining_secs, 1);
            assert_eq!(total_secs, 30);
        }
        other => panic!("expected Tick, got {other:?}"),
    }

    // the transition seeds the break from the edited config
    engine.tick(&edited);
    assert_eq!(engine.phase_clock().phase(), Phase::Break);
    assert_eq!(engine.phase_clock().remaining_secs(), 8);
}

#[test]
fn interrupted_work_phase_is_never_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(10, 2);
    let mut engine = engine_at(&dir, &config);

    engine.start(&config).unwrap();
    for _ in 0..4 {
        engine.tick(&config);
    }
    engine.stop();
    engine.reset(&config);
    engine.start(&config).unwrap();

    assert_eq!(engine.recorder().today().sessions, 0);
    assert_eq!(engine.phase_clock().remaining_secs(), 10);
}

#[test]
fn applying_a_preset_reconfigures_and_reseeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = ScheduleCatalog::open(dir.path().join("schedule.json"));
    catalog.add(ScheduleEntry::new("Sprint", 50, 10)).unwrap();

    let mut config = TimerConfig::default();
    let mut clock = studoru_core::PhaseClock::new(&config);
    let entry = catalog.find_by_name("Sprint").unwrap().clone();
    schedule::apply(&entry, &mut config, &mut clock);

    assert_eq!(config.work_duration, 50);
    assert_eq!(config.break_duration, 10);
    assert_eq!(clock.remaining_secs(), 50 * 60);
    assert!(!clock.is_running());
}

#[test]
fn recorded_sessions_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = secs_config(1, 1);
    {
        let mut engine = engine_at(&dir, &config);
        engine.start(&config).unwrap();
        engine.tick(&config);
    }

    let reopened = StatsStore::open(dir.path().join("stats.json"));
    let day = reopened.day("2026-03-09").unwrap();
    assert_eq!(day.sessions, 1);
    assert_eq!(day.details[0].name, "Session 1");
    assert_eq!(day.details[0].time, "09:00");
}
