//! TOML configuration schema types for deckboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`. Duration fields use human-readable strings
//! (e.g. `"250ms"`) parsed by the `humantime` crate at the call site.

use serde::{Deserialize, Serialize};

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [ui]
/// [storage]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TUI appearance and behavior settings.
    pub ui: UiConfig,
    /// State persistence settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// TUI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Widget ids selected on first launch, before any state is persisted.
    /// Ignored once `dashboard_selected_components` exists in the store.
    pub initial_widgets: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            initial_widgets: vec!["overview".to_string(), "analytics".to_string()],
        }
    }
}

/// State persistence configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted dashboard state. Empty string means the
    /// XDG default (`~/.local/share/deckboard`).
    pub state_dir: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr, which is only useful
    /// outside the TUI (e.g. `dbd config validate`).
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive string understood by `tracing_subscriber`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[ui]
tick_rate = "100ms"
initial_widgets = ["reports"]

[storage]
state_dir = "/custom/state"

[log]
level = "debug"
file = "/var/log/dbd.log"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.ui.tick_rate, "100ms");
        assert_eq!(config.ui.initial_widgets, vec!["reports"]);
        assert_eq!(config.storage.state_dir, "/custom/state");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file, "/var/log/dbd.log");
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[ui]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.ui.tick_rate, "250ms");
    }

    #[test]
    fn default_initial_widgets() {
        let config = Config::default();
        assert_eq!(config.ui.initial_widgets, vec!["overview", "analytics"]);
    }

    #[test]
    fn default_tick_rate() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate, "250ms");
    }

    #[test]
    fn default_state_dir_is_empty() {
        let config = Config::default();
        assert_eq!(config.storage.state_dir, "");
    }

    #[test]
    fn default_log_level_is_info() {
        let config = Config::default();
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn log_level_all_variants() {
        for (input, expected) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let toml_str = format!("level = \"{}\"", input);
            let log: LogConfig = toml::from_str(&toml_str).expect("log level should parse");
            assert_eq!(log.level, expected);
        }
    }

    #[test]
    fn invalid_log_level_returns_error() {
        let toml_str = r#"level = "verbose""#;
        let result: Result<LogConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[log]
level = "trace"
"#;
        let config: Config = toml::from_str(toml_str).expect("partial config should parse");
        assert_eq!(config.log.level, LogLevel::Trace);
        assert_eq!(config.ui.tick_rate, "250ms");
        assert_eq!(config.storage.state_dir, "");
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("serialization should succeed");
        let parsed: Config = toml::from_str(&toml_str).expect("roundtrip should parse");
        assert_eq!(config, parsed);
    }

    #[test]
    fn tick_rate_parses_with_humantime() {
        let config = Config::default();
        let parsed = humantime::parse_duration(&config.ui.tick_rate);
        assert!(parsed.is_ok(), "default tick_rate should be parseable");
    }
}
