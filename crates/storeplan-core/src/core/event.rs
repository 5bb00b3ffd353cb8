//! Event system for layout change notification
//!
//! Provides:
//! - Event types published after a mutation has fully recomputed
//! - Event dispatcher for publishing events to subscribers
//!
//! Events are only ever published once a mutation, its overlap pass and its
//! metrics pass have all completed, so subscribers never observe stale flags.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Layout event types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutEvent {
    /// Store container was resized
    DimensionsChanged {
        /// New store width.
        width: f64,
        /// New store height.
        height: f64,
    },
    /// The zone list changed (add, update, delete, or suggestion applied)
    ZonesChanged {
        /// Number of zones after the change.
        zone_count: usize,
        /// Number of zones currently flagged as overlapping.
        overlapping: usize,
        /// Store utilization percentage after the change.
        utilization: f64,
    },
    /// The shelves of one zone changed
    ShelvesChanged {
        /// Zone whose shelves changed.
        zone_id: String,
        /// Number of shelves in the zone after the change.
        shelf_count: usize,
        /// Number of shelves in the zone flagged as overlapping.
        overlapping: usize,
    },
    /// Auto-arrangement ran over zones (`zone_id == None`) or one zone's shelves
    LayoutOptimized {
        /// Zone whose shelves were packed, or `None` for the store's zones.
        zone_id: Option<String>,
        /// Number of rectangles that had to be scaled down to fit.
        scaled: usize,
    },
}

impl std::fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutEvent::DimensionsChanged { width, height } => {
                write!(f, "Store resized to {} x {}", width, height)
            }
            LayoutEvent::ZonesChanged {
                zone_count,
                overlapping,
                utilization,
            } => write!(
                f,
                "Zones: {} ({} overlapping, {:.1}% utilized)",
                zone_count, overlapping, utilization
            ),
            LayoutEvent::ShelvesChanged {
                zone_id,
                shelf_count,
                overlapping,
            } => write!(
                f,
                "Shelves in {}: {} ({} overlapping)",
                zone_id, shelf_count, overlapping
            ),
            LayoutEvent::LayoutOptimized { zone_id, scaled } => match zone_id {
                Some(id) => write!(f, "Optimized shelves in {} ({} scaled)", id, scaled),
                None => write!(f, "Optimized zones ({} scaled)", scaled),
            },
        }
    }
}

/// Receiving end of a layout event subscription.
pub type LayoutEventReceiver = broadcast::Receiver<LayoutEvent>;

/// Event dispatcher for publishing events to subscribers
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for layout events.
    tx: broadcast::Sender<LayoutEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 64)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> LayoutEventReceiver {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of subscribers that received it; publishing with
    /// no subscribers is not an error.
    pub fn publish(&self, event: LayoutEvent) -> usize {
        tracing::trace!(%event, "publishing layout event");
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}
