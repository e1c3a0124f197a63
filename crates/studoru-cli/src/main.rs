use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studoru", version, about = "Studoru focus timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Daily focus statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Schedule preset management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("STUDORU_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_tree_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn timer_subcommands_parse() {
        for action in ["start", "pause", "resume", "stop", "reset", "tick", "status"] {
            assert!(Cli::try_parse_from(["studoru", "timer", action]).is_ok());
        }
        assert!(Cli::try_parse_from(["studoru", "timer", "watch", "--seconds", "3"]).is_ok());
    }

    #[test]
    fn schedule_add_requires_durations() {
        assert!(Cli::try_parse_from([
            "studoru", "schedule", "add", "Sprint", "--work", "50", "--break", "10"
        ])
        .is_ok());
        assert!(Cli::try_parse_from(["studoru", "schedule", "add", "Sprint"]).is_err());
    }
}
