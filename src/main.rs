/// Main entry point for the habits CLI
///
/// This file sets up logging, parses command line arguments, and dispatches
/// to the matching tracker action. Action output goes to stdout; logs go to
/// stderr so the output stays pipeable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_tracker_cli::tools;
use habit_tracker_cli::HabitTracker;

/// Get the default data directory with a fallback strategy
fn get_default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_dirs = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit-tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit-tracker");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habit-tracker");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit-tracker");
            p
        }),
    ];

    for dir in potential_dirs.iter().flatten() {
        // Take the first candidate that exists or can be created and is
        // actually writable.
        if std::fs::create_dir_all(dir).is_ok() {
            let test_file = dir.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(dir.clone());
            }
        }
    }

    Err("no writable data directory found; pass --data-dir".into())
}

/// Command line arguments for the habits CLI
#[derive(Parser, Debug)]
#[command(name = "habits", author, version, about, long_about = None)]
struct Args {
    /// Directory holding the record files
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Habit category
        #[arg(short, long, default_value = "General")]
        category: String,
        /// Check-in cadence: daily, weekly, monthly, or custom
        #[arg(short, long, default_value = "daily")]
        frequency: String,
    },
    /// Log a completion (or a miss) for a habit
    Log {
        /// Habit name or id prefix
        habit: String,
        /// Date to log, YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Record the day as missed instead of completed
        #[arg(long)]
        missed: bool,
    },
    /// List habits with streaks and completion rates
    List {
        /// Only habits in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show today's dashboard, or one habit's recent activity
    Status {
        /// Habit name or id prefix
        habit: Option<String>,
    },
    /// Completion statistics over a date range
    Stats {
        /// Range start, YYYY-MM-DD; defaults to 30 days before today
        #[arg(long)]
        start: Option<String>,
        /// Range end, YYYY-MM-DD; defaults to today
        #[arg(long)]
        end: Option<String>,
    },
    /// Edit a habit's name, category, or frequency
    Edit {
        /// Habit name or id prefix
        habit: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New frequency
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Remove a habit and its entire history
    Remove {
        /// Habit name or id prefix
        habit: String,
    },
    /// Export all records to a backup file
    Export {
        /// Target file; defaults to habit_tracker_export_YYYYMMDD.json
        path: Option<String>,
    },
    /// Import records from a backup file, replacing current data
    Import {
        /// Backup file to read
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker_cli={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => get_default_data_dir()?,
    };
    info!("Using data directory: {}", data_dir.display());

    let tracker = HabitTracker::open(&data_dir)?;
    let store = tracker.store();

    let message = match args.command {
        Command::Add {
            name,
            category,
            frequency,
        } => {
            tools::create_habit(
                store,
                tools::CreateHabitParams {
                    name,
                    category,
                    frequency,
                },
            )?
            .message
        }
        Command::Log {
            habit,
            date,
            missed,
        } => {
            tools::log_completion(
                store,
                tools::LogCompletionParams {
                    habit,
                    date,
                    completed: !missed,
                },
            )?
            .message
        }
        Command::List { category } => {
            tools::list_habits(store, tools::ListHabitsParams { category })?.message
        }
        Command::Status { habit } => {
            tools::dashboard(store, tools::StatusParams { habit })?.message
        }
        Command::Stats { start, end } => {
            tools::stats(store, tools::StatsParams { start, end })?.message
        }
        Command::Edit {
            habit,
            name,
            category,
            frequency,
        } => {
            tools::update_habit(
                store,
                tools::UpdateHabitParams {
                    habit,
                    name,
                    category,
                    frequency,
                },
            )?
            .message
        }
        Command::Remove { habit } => {
            tools::delete_habit(store, tools::DeleteHabitParams { habit })?.message
        }
        Command::Export { path } => {
            tools::export_backup(store, tools::ExportParams { path })?.message
        }
        Command::Import { path } => {
            tools::import_backup(store, tools::ImportParams { path })?.message
        }
    };

    println!("{}", message);
    Ok(())
}
