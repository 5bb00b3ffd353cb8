//! # Storeplan Layout
//!
//! 2D layout engine for retail store planning. Places axis-aligned rectangles
//! (zones inside the store, shelves inside a zone), keeps their overlap flags
//! and utilization metrics current, and auto-arranges them by row packing.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Rect`], gap-aware overlap tests and areas
//! - **Zone model**: [`StoreLayout`] holds the store container and its zones
//! - **Shelf model**: [`ShelfLayout`] holds shelves, scoped per zone
//! - **Packing**: deterministic row packing with a scale-down fallback
//! - **Session**: [`LayoutSession`] ties both models, products and change events
//! - **Serialization**: `.storeplan.json` layout files
//!
//! ## Architecture
//!
//! ```text
//! LayoutSession
//!   ├── StoreLayout (container + zones, gap 0)
//!   │     └── overlap pass -> LayoutMetrics
//!   ├── ShelfLayout (shelves grouped by zone, gap 0.1)
//!   │     └── overlap pass -> ShelfMetrics (per zone)
//!   ├── Products (carried, never laid out)
//!   └── EventDispatcher (published after recompute)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storeplan_layout::{LayoutOptions, LayoutSession, ZoneDraft};
//!
//! let mut session = LayoutSession::new("Demo", 30.0, 20.0, LayoutOptions::default()).unwrap();
//! session.add_zone(ZoneDraft::new("Produce", 0.0, 0.0, 10.0, 10.0)).unwrap();
//! let snap = session.add_zone(ZoneDraft::new("Dairy", 12.0, 0.0, 8.0, 8.0)).unwrap();
//! assert!(snap.overlapping_ids().is_empty());
//! ```

pub mod geometry;
pub mod metrics;
pub mod model;
pub mod options;
pub mod overlap;
pub mod packing;
pub mod selection_manager;
pub mod serialization;
pub mod session;
pub mod shelf_state;
pub mod snapshot;
pub mod store_state;

pub use geometry::{Rect, SHELF_OVERLAP_GAP, ZONE_OVERLAP_GAP};
pub use metrics::{LayoutMetrics, ShelfMetrics};
pub use model::{
    generate_id, LayoutShape, Product, Shelf, ShelfDraft, ShelfPatch, Zone, ZoneDraft, ZonePatch,
};
pub use options::LayoutOptions;
pub use packing::{pack_rows, PackingReport};
pub use serialization::{LayoutFile, LayoutMetadata, StoreData, FILE_FORMAT_VERSION};
pub use session::{shared_session, LayoutSession, SharedSession};
pub use shelf_state::ShelfLayout;
pub use snapshot::{Container, Optimized, ShelfSnapshot, StoreSnapshot};
pub use store_state::StoreLayout;
