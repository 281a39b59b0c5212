//! Configuration system for deckboard.
//!
//! TOML configuration loaded from the XDG config directory, with typed
//! errors and position-aware parse reporting.

pub mod default;
pub mod error;
pub mod loader;
pub mod schema;
pub mod xdg;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::Config;
