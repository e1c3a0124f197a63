use clap::Subcommand;
use studoru_core::{SessionRecorder, StatsStore, TimerConfig};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's aggregates and session records
    Today,
    /// One day's aggregates (key format YYYY-MM-DD)
    Day { date: String },
    /// Every recorded day
    All,
    /// Progress toward the configured daily target
    Target,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StatsStore::open_default()?;

    match action {
        StatsAction::Today => {
            let recorder = SessionRecorder::new(store);
            println!("{}", serde_json::to_string_pretty(&recorder.today())?);
        }
        StatsAction::Day { date } => match store.day(&date) {
            Some(day) => println!("{}", serde_json::to_string_pretty(day)?),
            None => {
                eprintln!("no sessions recorded on {date}");
                std::process::exit(1);
            }
        },
        StatsAction::All => {
            println!("{}", serde_json::to_string_pretty(store.days())?);
        }
        StatsAction::Target => {
            let config = TimerConfig::load_or_default();
            let target = config.target_minutes_clamped();
            let recorder = SessionRecorder::new(store);
            let summary = serde_json::json!({
                "focus_min": recorder.today_focus_min(),
                "target_min": target,
                "ratio": recorder.target_progress(target),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
