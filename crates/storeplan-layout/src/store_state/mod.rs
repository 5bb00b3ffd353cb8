//! Zone layout model: the store container and its zones.
//!
//! This module is split into submodules:
//! - `zones`: add, update, delete, replace and select zones
//! - `arrange`: auto-arrangement of the zones
//!
//! Every mutation finishes with [`StoreLayout::recompute`], so the zone list,
//! the overlap flags and the cached metrics always agree by the time a
//! snapshot is handed back.

mod arrange;
mod zones;

use storeplan_core::{LayoutError, Result};
use tracing::{debug, warn};

use crate::geometry::Rect;
use crate::metrics::{layout_metrics, LayoutMetrics};
use crate::model::{validate_stored_rect, LayoutShape, Zone};
use crate::options::LayoutOptions;
use crate::overlap::detect_overlaps;
use crate::selection_manager::SelectionManager;
use crate::snapshot::{Container, StoreSnapshot};

/// The store floor and its zones.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    width: f64,
    height: f64,
    zones: Vec<Zone>,
    metrics: LayoutMetrics,
    selection: SelectionManager,
    options: LayoutOptions,
}

impl StoreLayout {
    /// Creates an empty store with default options.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_options(width, height, LayoutOptions::default())
    }

    /// Creates an empty store.
    pub fn with_options(width: f64, height: f64, options: LayoutOptions) -> Result<Self> {
        Self::from_zones(width, height, Vec::new(), options)
    }

    /// Builds a store from existing zones (e.g. a loaded file).
    ///
    /// Stored overlap flags are ignored and recomputed. Stored sizes may be
    /// zero, as packing can produce them, but never negative or non-finite.
    pub fn from_zones(
        width: f64,
        height: f64,
        zones: Vec<Zone>,
        options: LayoutOptions,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        for zone in &zones {
            validate_stored_rect(&zone.id, &zone.rect())?;
        }
        let mut layout = Self {
            width,
            height,
            zones,
            metrics: LayoutMetrics::default(),
            selection: SelectionManager::new(),
            options,
        };
        if layout.options.clamp_to_container {
            layout.clamp_all();
        }
        layout.recompute();
        Ok(layout)
    }

    /// An empty store whose dimensions are known to be valid.
    pub(crate) fn empty(width: f64, height: f64, options: LayoutOptions) -> Self {
        let mut layout = Self {
            width,
            height,
            zones: Vec::new(),
            metrics: LayoutMetrics::default(),
            selection: SelectionManager::new(),
            options,
        };
        layout.recompute();
        layout
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn container(&self) -> Container {
        Container::new(self.width, self.height)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Metrics as of the last mutation.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn selected_zone_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Replaces the container size.
    ///
    /// Non-positive (or non-finite) sizes are rejected and leave the store
    /// unchanged.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<StoreSnapshot> {
        if let Err(err) = check_dimensions(width, height) {
            warn!(width, height, "rejected store dimensions");
            return Err(err);
        }
        self.width = width;
        self.height = height;
        if self.options.clamp_to_container {
            self.clamp_all();
        }
        self.recompute();
        Ok(self.snapshot())
    }

    /// Resets and recomputes every zone's `is_overlapping` flag.
    ///
    /// Returns the number of flagged zones. Calling it twice without a
    /// mutation in between yields the same flags.
    pub fn detect_overlaps(&mut self) -> usize {
        detect_overlaps(&mut self.zones, self.options.zone_gap)
    }

    /// Computes fresh store metrics from the current zones.
    pub fn calculate_layout_metrics(&self) -> LayoutMetrics {
        let refs: Vec<&Zone> = self.zones.iter().collect();
        layout_metrics(self.width, self.height, &refs, self.options.zone_gap)
    }

    /// Copies the current, consistent state out.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            container: self.container(),
            zones: self.zones.clone(),
            metrics: self.metrics,
            selected_zone_id: self.selection.selected_id().map(str::to_string),
        }
    }

    /// Overlap pass followed by the metrics pass.
    pub(crate) fn recompute(&mut self) {
        let flagged = self.detect_overlaps();
        self.metrics = self.calculate_layout_metrics();
        debug!(
            zones = self.zones.len(),
            flagged,
            utilization = self.metrics.utilization,
            "recomputed store layout"
        );
    }

    pub(crate) fn clamp_rect(&self, rect: Rect) -> Rect {
        if self.options.clamp_to_container {
            rect.clamp_within(self.width, self.height)
        } else {
            rect
        }
    }

    fn clamp_all(&mut self) {
        let (w, h) = (self.width, self.height);
        for zone in self.zones.iter_mut() {
            let clamped = zone.rect().clamp_within(w, h);
            zone.set_rect(clamped);
        }
    }
}

pub(crate) fn check_dimensions(width: f64, height: f64) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { width, height }.into())
    }
}
