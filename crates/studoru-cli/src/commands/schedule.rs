use clap::Subcommand;
use studoru_core::storage::data_dir;
use studoru_core::{schedule, PhaseClock, ScheduleCatalog, ScheduleEntry, TimerConfig};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Add a named preset
    Add {
        /// Preset name
        name: String,
        /// Work duration (minutes)
        #[arg(long)]
        work: u32,
        /// Break duration (minutes)
        #[arg(long = "break")]
        break_: u32,
    },
    /// List all presets
    List,
    /// Copy a preset's durations into the config and reseed the timer
    Apply { name: String },
    /// Delete the first preset with this name
    Delete { name: String },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = ScheduleCatalog::open_default()?;

    match action {
        ScheduleAction::Add { name, work, break_ } => {
            let entry = ScheduleEntry::new(name, work, break_);
            catalog.add(entry.clone())?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        ScheduleAction::List => {
            println!("{}", serde_json::to_string_pretty(&catalog.entries())?);
        }
        ScheduleAction::Apply { name } => {
            let entry = match catalog.find_by_name(&name) {
                Some(entry) => entry.clone(),
                None => {
                    eprintln!("schedule entry '{name}' not found");
                    std::process::exit(1);
                }
            };

            let mut config = TimerConfig::load_or_default();
            let state_path = data_dir()?.join("timer.json");
            let mut clock = std::fs::read_to_string(&state_path)
                .ok()
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| PhaseClock::new(&config));

            let event = schedule::apply(&entry, &mut config, &mut clock);
            config.save()?;
            std::fs::write(&state_path, serde_json::to_string(&clock)?)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ScheduleAction::Delete { name } => {
            let removed = catalog.delete(&name)?;
            println!("deleted '{}'", removed.name);
        }
    }
    Ok(())
}
