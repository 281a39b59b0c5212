//! Deckboard library
//!
//! This crate provides the core functionality for the deckboard terminal
//! dashboard: a grid of user-selectable widgets that can be rearranged,
//! resized, and captured as named layout snapshots.
//!
//! # Architecture
//!
//! - [`catalog`] — the static catalog of available widget kinds.
//! - [`store`] — persistence port (key/value, JSON-encoded) with a
//!   file-backed and an in-memory implementation.
//! - [`session`] — the dashboard session: selected widgets, per-widget
//!   configuration, snapshot registry, and their persistence rules.
//! - [`layout`] — grid geometry: default placement, reconciliation with
//!   the selection, and named layout snapshots.
//! - [`widgets`] — the widget trait, factory registry, and the built-in
//!   panels (all backed by mock data).
//! - [`tui`] — terminal user interface built on ratatui.
//! - [`config`] — TOML configuration with XDG path resolution.

/// Static widget catalog shared by the session and the widget host.
pub mod catalog;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Grid layout engine and named layout snapshots.
pub mod layout;

/// Logging initialization for the TUI process.
pub mod logging;

/// Dashboard session state: selection, configuration, persistence.
pub mod session;

/// Persistence port and its implementations.
pub mod store;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

/// Widget system for composable dashboard panels.
pub mod widgets;
