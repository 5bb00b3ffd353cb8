//! # Storeplan
//!
//! Retail store floor planner: places zones inside a store and shelves inside
//! zones, flags overlaps, reports space utilization and auto-arranges
//! rectangles by row packing.
//!
//! ## Architecture
//!
//! Storeplan is organized as a workspace with multiple crates:
//!
//! 1. **storeplan-core** - Error taxonomy, layout events, shared-state aliases
//! 2. **storeplan-layout** - Geometry, zone and shelf models, packing, layout files
//! 3. **storeplan-settings** - Configuration persistence
//! 4. **storeplan** - Logging bootstrap and the command-line front end

pub mod commands;

pub use storeplan_core::{Error, LayoutError, LayoutEvent, Result, SnapshotError};
pub use storeplan_layout::{
    LayoutFile, LayoutOptions, LayoutSession, ShelfDraft, ShelfSnapshot, StoreSnapshot, ZoneDraft,
};
pub use storeplan_settings::{Config, LayoutSettings, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output to stderr, so command output on stdout stays machine-readable
/// - RUST_LOG environment variable support (overrides the configured level)
/// - JSON lines when `settings.json` is set
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Layout options derived from the configured layout defaults
pub fn layout_options(config: &Config) -> LayoutOptions {
    LayoutOptions {
        zone_gap: config.layout.zone_overlap_gap,
        shelf_gap: config.layout.shelf_overlap_gap,
        clamp_to_container: config.layout.clamp_to_container,
        cascade_zone_delete: config.layout.cascade_zone_delete,
    }
}
