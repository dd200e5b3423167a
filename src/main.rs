//! Tab Data Store: maintenance tool for tab and window storage.
//!
//! Resolves the storage directories inside a shared container and runs the
//! store's directory operations against them.
//!
//! Usage:
//!   tab-data-store --group-id group.org.example paths          # Show resolved directories
//!   tab-data-store --group-id group.org.example paths --json   # Same, as JSON
//!   tab-data-store init                                        # Create every directory
//!   tab-data-store list window-data                            # List a category
//!   tab-data-store clear tab-session-data                      # Empty a category
//!   tab-data-store backup                                      # Primary -> backup window data
//!   tab-data-store restore                                     # Backup -> primary window data
//!
//! The group identifier and containers root may also come from
//! `TAB_DATA_STORE_GROUP_ID` / `TAB_DATA_STORE_CONTAINERS_ROOT` or from
//! `~/.tab-data-store/config.json`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tds_core::{
    ConfigError, LogCategory, LogLevel, Logger, PathCategory, SharedContainerInfo, StoreConfig,
};
use tds_fs::{LocalFileSystem, TracingLogger};
use tds_store::{DefaultTabFileManager, TabFileManager, WindowDataBackup};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tab-data-store", about = "Tab Data Store: tab and window storage maintenance")]
struct Cli {
    /// Shared container (application group) identifier
    #[arg(long, env = "TAB_DATA_STORE_GROUP_ID")]
    group_id: Option<String>,

    /// Directory holding one subdirectory per shared container
    #[arg(long, env = "TAB_DATA_STORE_CONTAINERS_ROOT")]
    containers_root: Option<PathBuf>,

    /// Config file (defaults to ~/.tab-data-store/config.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Write logs to a file (defaults to ~/.tab-data-store/logs/tab-data-store.log if no path given)
    #[arg(long, default_missing_value = "DEFAULT", num_args = 0..=1)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved directory of every category
    Paths {
        /// Emit a JSON object keyed by directory name
        #[arg(long)]
        json: bool,
    },
    /// Create every category directory
    Init,
    /// List the non-hidden entries of a category directory
    List {
        /// profile.profile, tab-session-data, window-data or window-data-backup
        category: PathCategory,
    },
    /// Remove every entry of a category directory
    Clear {
        /// profile.profile, tab-session-data, window-data or window-data-backup
        category: PathCategory,
    },
    /// Copy the primary window data over the backup
    Backup,
    /// Copy the backup window data over the primary
    Restore,
}

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".tab-data-store")
}

fn init_tracing(verbose: bool, log_file: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let Some(log_file_arg) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    };

    let log_path = if log_file_arg == "DEFAULT" {
        app_dir().join("logs/tab-data-store.log")
    } else {
        PathBuf::from(log_file_arg)
    };

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", log_path.display());
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    eprintln!("Logging to {}", log_path.display());
}

/// CLI flags (and their env vars) win over the config file.
fn resolve_config(cli: &Cli) -> Result<StoreConfig, ConfigError> {
    let file_config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::load_or_default(&app_dir().join("config.json"))?,
    };
    let flags = StoreConfig {
        shared_container_identifier: cli.group_id.clone(),
        containers_root: cli.containers_root.clone(),
    };
    Ok(flags.merge(file_config))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file.as_deref());

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let file_system = match config.containers_root {
        Some(root) => LocalFileSystem::new(root),
        None => LocalFileSystem::with_default_root(),
    };
    let container = Arc::new(SharedContainerInfo::new(config.shared_container_identifier));
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
    let manager = DefaultTabFileManager::new(Arc::new(file_system), logger.clone(), container);

    std::process::exit(run(cli.command, &manager, logger));
}

fn run(command: Command, manager: &DefaultTabFileManager, logger: Arc<dyn Logger>) -> i32 {
    match command {
        Command::Paths { json } => {
            print_paths(manager, json);
            0
        }

        Command::Init => {
            for category in PathCategory::ALL {
                let Some(dir) = manager.directory(category) else {
                    return unconfigured();
                };
                manager.create_directory_at_path(&dir);
                if manager.file_exists(&dir) {
                    println!("  {:<20} {}", category.segment(), dir.display());
                } else {
                    error!("Could not create {}", dir.display());
                    return 1;
                }
            }
            0
        }

        Command::List { category } => {
            let Some(dir) = manager.directory(category) else {
                return unconfigured();
            };
            for entry in manager.contents_of_directory(&dir) {
                println!("{}", entry.display());
            }
            0
        }

        Command::Clear { category } => {
            let Some(dir) = manager.directory(category) else {
                return unconfigured();
            };
            let before = manager.contents_of_directory(&dir).len();
            manager.remove_all_files_at(&dir);
            let remaining = manager.contents_of_directory(&dir).len();
            logger.log(
                &format!(
                    "Cleared {} of {before} entries in {}",
                    before.saturating_sub(remaining),
                    dir.display()
                ),
                LogLevel::Info,
                LogCategory::Storage,
            );
            if remaining > 0 {
                println!("  {remaining} entries could not be removed (run with --verbose for details)");
            }
            0
        }

        Command::Backup => {
            let backup = WindowDataBackup::new(manager.clone(), logger);
            match backup.create_backup() {
                Ok(()) => 0,
                Err(e) => {
                    error!("Backup failed: {e}");
                    1
                }
            }
        }

        Command::Restore => {
            let backup = WindowDataBackup::new(manager.clone(), logger);
            match backup.restore_from_backup() {
                Ok(()) => 0,
                Err(e) => {
                    error!("Restore failed: {e}");
                    1
                }
            }
        }
    }
}

fn print_paths(manager: &DefaultTabFileManager, json: bool) {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = PathCategory::ALL
            .into_iter()
            .map(|category| {
                let value = manager
                    .directory(category)
                    .map(|p| serde_json::Value::String(p.to_string_lossy().to_string()))
                    .unwrap_or(serde_json::Value::Null);
                (category.segment().to_string(), value)
            })
            .collect();
        match serde_json::to_string_pretty(&map) {
            Ok(s) => println!("{s}"),
            Err(e) => error!("Failed to encode paths: {e}"),
        }
        return;
    }

    for category in PathCategory::ALL {
        match manager.directory(category) {
            Some(dir) => println!("  {:<20} {}", category.segment(), dir.display()),
            None => println!("  {:<20} (unconfigured)", category.segment()),
        }
    }
}

fn unconfigured() -> i32 {
    error!("No shared container identifier configured (use --group-id or TAB_DATA_STORE_GROUP_ID)");
    1
}
