//! Error handling for Storeplan
//!
//! Provides the error types for every layer of the layout engine:
//! - Layout errors (dimension validation, missing parent zones, bad rectangles)
//! - Snapshot errors (layout file versioning, parsing and file I/O)
//!
//! Unknown rectangle ids on update/delete are deliberately not errors; those
//! operations are no-ops that still trigger a recompute.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents validation failures raised by the zone and shelf models
/// before any state is mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Container dimensions must both be strictly positive
    #[error("Invalid dimensions {width} x {height}: width and height must be > 0")]
    InvalidDimension {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// A shelf operation referenced a zone that does not exist
    #[error("Zone not found: {id}")]
    ZoneNotFound {
        /// The zone id that could not be resolved.
        id: String,
    },

    /// A rectangle carried unusable geometry
    #[error("Invalid rectangle '{id}': {reason}")]
    InvalidRectangle {
        /// The id (or name, for drafts) of the offending rectangle.
        id: String,
        /// Why the rectangle was rejected.
        reason: String,
    },
}

/// Snapshot error type
///
/// Represents errors related to reading and writing layout files.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The file was written by an incompatible format version
    #[error("Unsupported layout file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the file.
        found: String,
        /// The version this build reads.
        expected: String,
    },

    /// The file contents could not be parsed
    #[error("Failed to parse layout file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file could not be read or written
    #[error("Layout file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for Storeplan
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout validation error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Layout file error
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout validation error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a layout file error
    pub fn is_snapshot_error(&self) -> bool {
        matches!(self, Error::Snapshot(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
