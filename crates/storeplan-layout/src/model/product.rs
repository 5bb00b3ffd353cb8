use serde::{Deserialize, Serialize};

/// Merchandise placed on a shelf.
///
/// Products are carried alongside the layout for the placement layer; they
/// never take part in overlap detection, metrics or packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    /// Footprint on the shelf, in meters.
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    pub zone_id: String,
    pub shelf_id: String,
}
