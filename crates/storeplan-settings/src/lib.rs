//! Storeplan Settings Crate
//!
//! Handles application configuration: layout defaults, logging and the
//! recent files list, persisted as JSON or TOML.

pub mod config;

pub use config::{Config, LayoutSettings, LoggingSettings, MAX_RECENT_FILES};
