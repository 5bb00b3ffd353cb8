//! Serialization and deserialization for layout files.
//!
//! Implements save/load for `.storeplan.json` files: the plain data shapes
//! the persistence adapter exchanges with the REST layer (store, zones,
//! shelves, products) plus file metadata.
//!
//! Derived fields in a file (`isOverlapping`) are never trusted; loading a
//! file into a session recomputes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storeplan_core::{Result, SnapshotError};
use tracing::info;

use crate::model::{Product, Shelf, Zone};

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub store: StoreData,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Store container and zones as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl LayoutFile {
    /// Create an empty layout file for a `width` x `height` store
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            store: StoreData {
                width,
                height,
                zones: Vec::new(),
            },
            shelves: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Parse a layout file from JSON, rejecting unknown format versions
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LayoutFile = serde_json::from_str(json).map_err(SnapshotError::from)?;
        if file.version != FILE_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: file.version,
                expected: FILE_FORMAT_VERSION.to_string(),
            }
            .into());
        }
        Ok(file)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(SnapshotError::from)?)
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).map_err(SnapshotError::from)?;
        info!(path = %path.as_ref().display(), zones = self.store.zones.len(), "saved layout");
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SnapshotError::from)?;
        let file = Self::from_json(&content)?;
        info!(
            path = %path.as_ref().display(),
            zones = file.store.zones.len(),
            shelves = file.shelves.len(),
            "loaded layout"
        );
        Ok(file)
    }
}
