//! Command handlers behind the `storeplan` binary.
//!
//! Handlers return plain data; `main` decides how to print it.

use anyhow::{bail, Context};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use storeplan_layout::{
    LayoutFile, LayoutMetrics, LayoutSession, PackingReport, ShelfMetrics, ShelfSnapshot,
    StoreSnapshot,
};
use storeplan_settings::Config;

use crate::layout_options;

/// Output of `storeplan analyze`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    pub store: StoreSnapshot,
    pub zones: Vec<ShelfSnapshot>,
    /// Shelves whose zone no longer exists.
    pub orphaned_shelf_ids: Vec<String>,
}

/// Output of `storeplan optimize`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeSummary {
    pub output: PathBuf,
    /// Zone whose shelves were packed, or `None` for the store's zones.
    pub zone_id: Option<String>,
    pub report: PackingReport,
    pub metrics: OptimizedMetrics,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OptimizedMetrics {
    Store(LayoutMetrics),
    Zone(ShelfMetrics),
}

fn open_session(path: &Path, config: &Config) -> anyhow::Result<LayoutSession> {
    let file = LayoutFile::load_from_file(path)
        .with_context(|| format!("Failed to load layout file {}", path.display()))?;
    LayoutSession::from_file(file, layout_options(config))
        .with_context(|| format!("Layout file {} contains invalid geometry", path.display()))
}

/// Creates an empty layout file.
///
/// Missing dimensions fall back to the configured store defaults.
pub fn run_new(
    path: &Path,
    name: &str,
    width: Option<f64>,
    height: Option<f64>,
    force: bool,
    config: &Config,
) -> anyhow::Result<StoreSnapshot> {
    if path.exists() && !force {
        bail!(
            "Layout file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let width = width.unwrap_or(config.layout.default_store_width);
    let height = height.unwrap_or(config.layout.default_store_height);
    let session = LayoutSession::new(name, width, height, layout_options(config))
        .context("Invalid store dimensions")?;
    session
        .to_file()
        .save_to_file(path)
        .with_context(|| format!("Failed to write layout file {}", path.display()))?;
    info!(path = %path.display(), width, height, "created layout");
    Ok(session.snapshot())
}

/// Records `file` at the top of the recent files list and saves the config.
///
/// Without a config location the list is only updated in memory. A failed
/// save is logged, not returned: the command itself already succeeded.
pub fn remember_recent_file(config: &mut Config, config_path: Option<&Path>, file: &Path) {
    let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    config.add_recent_file(file);
    if let Some(path) = config_path {
        if let Err(e) = config.save_to_file(path) {
            warn!(path = %path.display(), error = %e, "could not update recent files");
        }
    }
}

/// Loads a layout, recomputes every derived field and reports it.
pub fn run_analyze(path: &Path, config: &Config) -> anyhow::Result<AnalysisReport> {
    let session = open_session(path, config)?;
    let store = session.snapshot();
    let zones = store
        .zones
        .iter()
        .map(|zone| session.shelf_snapshot(&zone.id))
        .collect::<storeplan_core::Result<Vec<_>>>()?;
    let orphaned_shelf_ids = session
        .orphaned_shelves()
        .into_iter()
        .map(|s| s.id.clone())
        .collect();

    info!(
        path = %path.display(),
        zones = store.zones.len(),
        utilization = store.metrics.utilization,
        "analyzed layout"
    );
    Ok(AnalysisReport {
        name: session.name().to_string(),
        store,
        zones,
        orphaned_shelf_ids,
    })
}

/// Packs the zones (or one zone's shelves) and writes the layout back out.
///
/// Writes to `output` when given, otherwise over `path`.
pub fn run_optimize(
    path: &Path,
    zone_id: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> anyhow::Result<OptimizeSummary> {
    let mut session = open_session(path, config)?;

    let (report, metrics) = match zone_id {
        Some(id) => {
            let optimized = session
                .optimize_zone(id)
                .with_context(|| format!("Cannot optimize zone '{}'", id))?;
            (
                optimized.report,
                OptimizedMetrics::Zone(optimized.snapshot.metrics),
            )
        }
        None => {
            let optimized = session.optimize_layout();
            (
                optimized.report,
                OptimizedMetrics::Store(optimized.snapshot.metrics),
            )
        }
    };

    let output = output.unwrap_or(path).to_path_buf();
    session
        .to_file()
        .save_to_file(&output)
        .with_context(|| format!("Failed to write layout file {}", output.display()))?;

    Ok(OptimizeSummary {
        output,
        zone_id: zone_id.map(str::to_string),
        report,
        metrics,
    })
}

/// Writes a default config file, refusing to overwrite unless `force`.
pub fn run_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path().context("No platform config directory found")?,
    };
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(path)
}
