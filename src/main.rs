//! Deckboard - CLI entry point
//!
//! This binary provides the command-line interface for the deckboard
//! terminal dashboard: launching the TUI, managing the TOML configuration
//! file, and inspecting or resetting the persisted dashboard state.

use clap::{Parser, Subcommand};
use deckboard::config::{default, loader::ConfigLoader, xdg};
use deckboard::logging;
use deckboard::session::{keys, DashboardSession};
use deckboard::store::{DashStore, JsonDirStore, MemoryStore};
use deckboard::tui::app::App;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Deckboard terminal widget dashboard
#[derive(Parser)]
#[command(name = "dbd")]
#[command(version, about = "Deckboard terminal widget dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the dbd CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard TUI (the default when no subcommand is given)
    Tui {
        /// Override the state directory
        #[arg(long)]
        state_dir: Option<PathBuf>,

        /// Keep all state in memory; nothing is read from or written to disk
        #[arg(long)]
        ephemeral: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Inspect or reset persisted dashboard state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Actions for the `state` subcommand.
#[derive(Subcommand)]
enum StateAction {
    /// Show the state directory path
    Path,
    /// Delete all persisted dashboard state
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui {
        state_dir: None,
        ephemeral: false,
    }) {
        Commands::Tui {
            state_dir,
            ephemeral,
        } => run_tui(state_dir, ephemeral),
        Commands::Config { action } => run_config_command(action),
        Commands::State { action } => run_state_command(action),
    }
}

/// Loads config, opens the store, hydrates the session, and runs the TUI.
fn run_tui(state_dir_flag: Option<PathBuf>, ephemeral: bool) -> ExitCode {
    let config = match ConfigLoader::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Failed to open log file '{}': {e}", config.log.file);
        return ExitCode::FAILURE;
    }

    let store: Box<dyn DashStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        let dir = resolve_state_dir(state_dir_flag, &config.storage.state_dir);
        match JsonDirStore::open(&dir) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("State error: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let tick_rate = humantime::parse_duration(&config.ui.tick_rate).unwrap_or_else(|e| {
        tracing::warn!("invalid ui.tick_rate '{}': {e}", config.ui.tick_rate);
        Duration::from_millis(250)
    });

    let session = DashboardSession::hydrate(store, &config.ui.initial_widgets);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(session, tick_rate);
        app.run().await
    }) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Resolution order: CLI flag, then config `[storage] state_dir`, then XDG.
fn resolve_state_dir(flag: Option<PathBuf>, configured: &str) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if !configured.is_empty() {
        return xdg::expand_tilde(configured);
    }
    xdg::state_dir()
}

fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => match ConfigLoader::load_default() {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_state_command(action: StateAction) -> ExitCode {
    let config = match ConfigLoader::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dir = resolve_state_dir(None, &config.storage.state_dir);

    match action {
        StateAction::Path => {
            println!("{}", dir.display());
            ExitCode::SUCCESS
        }
        StateAction::Reset => {
            // Remove only the known state entries, not arbitrary directory
            // contents.
            let mut removed = 0;
            for key in [
                keys::SELECTED_COMPONENTS,
                keys::LAYOUTS_VECTOR,
                keys::ACTIVE_LAYOUT,
                keys::COMPONENT_PROPS,
            ] {
                let path = dir.join(format!("{key}.json"));
                match std::fs::remove_file(&path) {
                    Ok(()) => removed += 1,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => {
                        eprintln!("Failed to remove {}: {e}", path.display());
                        return ExitCode::FAILURE;
                    }
                }
            }
            println!("Removed {removed} state entries from {}", dir.display());
            ExitCode::SUCCESS
        }
    }
}
