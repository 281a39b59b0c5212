//! Default configuration template and file creation utilities.
//!
//! Provides a well-commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A well-commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[ui]`, `[storage]`, `[log]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Deckboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
# Uncomment and modify options to customize your dashboard.
#
# Location: $XDG_CONFIG_HOME/deckboard/config.toml

# ==============================================================================
# UI Configuration
# ==============================================================================

[ui]

# Render tick rate as a human-readable duration.
# Controls how often the TUI redraws. Lower values = smoother but more CPU.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Widget ids selected on first launch, before any state is persisted.
# Ignored once a selection has been saved.
# Available widgets: "overview", "analytics", "settings", "profile",
# "notifications", "reports"
initial_widgets = ["overview", "analytics"]

# ==============================================================================
# Storage Configuration
# ==============================================================================

[storage]

# Directory for persisted dashboard state (selection, layouts, snapshots).
# Empty string means the XDG default (~/.local/share/deckboard).
# Tilde (~) is expanded to the user's home directory.
state_dir = ""

# ==============================================================================
# Logging Configuration
# ==============================================================================

[log]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
#   error - Only errors
#   warn  - Errors and warnings
#   info  - General operational information (recommended)
#   debug - Detailed debugging information
#   trace - Very verbose, includes all internal operations
level = "info"

# Path to log file. Empty string means log to stderr, which is only
# readable outside the TUI (e.g. with `dbd config validate`).
# Examples: "/tmp/dbd.log", "~/.local/share/deckboard/dbd.log"
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path: path.clone() });
        }
        // Back up existing file
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &PathBuf) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.clone(),
                source: e,
            }
        })?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
