//! Logging initialization for deckboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DBD_LOG` environment variable, falling back to the configured level
//! when the variable is unset. Output goes to the configured log file, or
//! stderr when no file is set — stderr is only readable outside the TUI.
//!
//! # Usage
//!
//! ```bash
//! # Default (level from config)
//! dbd tui
//!
//! # Debug level
//! DBD_LOG=debug dbd tui
//!
//! # Module-specific filtering
//! DBD_LOG=deckboard=debug,warn dbd tui
//! ```

use std::fs::OpenOptions;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogConfig;
use crate::config::xdg;

/// Initialize the tracing subscriber from the `[log]` config section.
///
/// Reads the `DBD_LOG` environment variable for filter directives, falling
/// back to `config.level`. When `config.file` is non-empty the log is
/// appended there (tilde expanded, parent directories created); otherwise
/// output goes to stderr.
///
/// Returns an error only when the configured log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(config: &LogConfig) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_env("DBD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    if config.file.is_empty() {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    let path = xdg::expand_tilde(&config.file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Arc::new(file))
        .init();
    Ok(())
}
