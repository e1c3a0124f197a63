use std::path::PathBuf;

use clap::Subcommand;
use studoru_core::storage::data_dir;
use studoru_core::{PhaseClock, SessionRecorder, StatsStore, TimerConfig, TimerEngine};

const STATE_FILE: &str = "timer.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a work phase from the configured durations
    Start,
    /// Pause the countdown
    Pause,
    /// Resume a halted countdown
    Resume,
    /// Stop the countdown without reseeding it
    Stop,
    /// Reset to an idle work phase
    Reset,
    /// Advance the countdown by one second
    Tick,
    /// Tick once per second in the foreground, printing each event
    Watch {
        /// Stop after this many ticks (default: run until interrupted)
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Print current timer state as JSON
    Status,
}

fn state_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(STATE_FILE))
}

/// Restore the persisted countdown, or seed a fresh idle one.
fn load_clock(config: &TimerConfig) -> PhaseClock {
    if let Ok(path) = state_path() {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(clock) = serde_json::from_str::<PhaseClock>(&json) {
                return clock;
            }
        }
    }
    PhaseClock::new(config)
}

fn save_clock(clock: &PhaseClock) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(clock)?;
    std::fs::write(state_path()?, json)?;
    Ok(())
}

fn open_engine(config: &TimerConfig) -> Result<TimerEngine, Box<dyn std::error::Error>> {
    let recorder = SessionRecorder::new(StatsStore::open_default()?);
    Ok(TimerEngine::from_parts(load_clock(config), recorder))
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = TimerConfig::load_or_default();
    let mut engine = open_engine(&config)?;

    match action {
        TimerAction::Start => {
            let event = engine.start(&config)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Pause => match engine.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot(&config))?),
        },
        TimerAction::Resume => match engine.resume() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot(&config))?),
        },
        TimerAction::Stop => {
            let event = engine.stop();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Reset => {
            let event = engine.reset(&config);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Tick => match engine.tick(&config) {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot(&config))?),
        },
        TimerAction::Watch { seconds } => {
            let mut ticked = 0u64;
            while engine.phase_clock().is_running() {
                std::thread::sleep(std::time::Duration::from_secs(1));
                // re-read the config file so concurrent edits apply on
                // the very next tick, exactly as in-process edits do
                let fresh = TimerConfig::load_or_default();
                if let Some(event) = engine.tick(&fresh) {
                    println!("{}", serde_json::to_string(&event)?);
                }
                // best-effort durability: a failed state write must not
                // interrupt ticking
                if let Err(e) = save_clock(engine.phase_clock()) {
                    tracing::warn!("timer state flush failed: {e}");
                }
                ticked += 1;
                if seconds.is_some_and(|limit| ticked >= limit) {
                    break;
                }
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot(&config))?);
        }
    }

    save_clock(engine.phase_clock())?;
    Ok(())
}
