//! MEN announcement monitor CLI
//!
//! Polls the ministry's announcement feed and raises console, desktop
//! and Telegram notifications for anything new.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use menwatch::{
    config::Config,
    error::Result,
    notify::{ConsoleNotifier, DesktopNotifier, Notifier, TelegramNotifier},
    pipeline,
    services::HttpFeedSource,
    storage::{LocalMarkerStore, MarkerStore},
};

/// menwatch - MEN Announcement Monitor
#[derive(Parser, Debug)]
#[command(
    name = "menwatch",
    version,
    about = "Watches the MEN announcement feed and notifies on new items"
)]
struct Cli {
    /// Path to the last-seen-id state file (overrides MENWATCH_STATE_FILE)
    #[arg(short, long)]
    state_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the feed continuously until Ctrl-C (default)
    Watch,

    /// Run a single check cycle and exit
    Check,

    /// Show the state file path and last seen id
    Status,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Assemble the notification sinks for this run.
fn build_sinks(config: &Config) -> Vec<Box<dyn Notifier>> {
    let mut sinks: Vec<Box<dyn Notifier>> = vec![
        Box::new(ConsoleNotifier::new(config.base_url.clone())),
        Box::new(DesktopNotifier::new()),
    ];

    match TelegramNotifier::from_config(config) {
        Some(telegram) => sinks.push(Box::new(telegram)),
        None => log::warn!("Telegram configuration missing. Skipping Telegram notifications."),
    }

    sinks
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::from_env()?;
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }
    config.validate()?;

    let store = LocalMarkerStore::new(&config.state_file);

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => {
            let feed = HttpFeedSource::new(&config)?;
            let sinks = build_sinks(&config);
            pipeline::run_watch(&config, &feed, &store, &sinks).await?;
        }

        Command::Check => {
            let feed = HttpFeedSource::new(&config)?;
            let sinks = build_sinks(&config);
            let outcome = pipeline::run_check(&feed, &store, &sinks).await?;
            log::info!("Check finished: {:?}", outcome);
        }

        Command::Status => {
            println!("State file : {}", config.state_file.display());
            match store.load().await? {
                Some(id) => println!("Last seen  : {}", id),
                None => println!("Last seen  : none (first run pending)"),
            }
            if let Ok(meta) = std::fs::metadata(&config.state_file) {
                if let Ok(modified) = meta.modified() {
                    let when: chrono::DateTime<chrono::Local> = modified.into();
                    println!("Updated    : {}", when.format("%Y-%m-%d %H:%M:%S"));
                }
            }
        }
    }

    Ok(())
}
