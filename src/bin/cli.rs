//! Roster Tracker CLI
//!
//! Scheduled entry point: run without arguments to perform one sync.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster_tracker::{
    error::Result,
    models::Config,
    pipeline,
    storage::{LocalSnapshotStore, SnapshotStore},
};

/// Roster Tracker - Course Instructor Change Log
#[derive(Parser, Debug)]
#[command(
    name = "roster-tracker",
    version,
    about = "Records instructor additions and removals per course"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current rosters, record changes and save the snapshot (default)
    Run,

    /// Validate configuration
    Validate,

    /// Show stored snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config).with_env_overrides();
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            config.validate()?;
            let report = pipeline::run_sync(&config).await?;

            if report.baseline_seeded {
                log::info!(
                    "Baseline saved: {} courses, {} instructor assignments",
                    report.course_count,
                    report.instructor_count
                );
            } else {
                log::info!(
                    "Sync complete: {} courses, {} added, {} removed",
                    report.course_count,
                    report.added,
                    report.removed
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Info => {
            let store = LocalSnapshotStore::new(&config.snapshot.path);
            log::info!("Snapshot file: {}", store.path().display());

            match store.load().await? {
                Some(snapshot) => {
                    log::info!("Courses: {}", snapshot.course_count());
                    log::info!("Instructor assignments: {}", snapshot.instructor_count());
                }
                None => log::info!("No snapshot found yet. The next run seeds the baseline."),
            }
        }
    }

    Ok(())
}
