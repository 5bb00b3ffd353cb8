use serde::{Deserialize, Serialize};

use super::LayoutShape;
use crate::geometry::Rect;

/// A rectangular fixture inside one zone.
///
/// Coordinates are relative to the owning zone's top-left corner, so the
/// zone's `width` x `height` is the shelf container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub category: String,
    /// Owning zone. Loosely held: the zone may have been deleted.
    pub zone_id: String,
    #[serde(default)]
    pub is_overlapping: bool,
}

impl Shelf {
    pub fn from_draft(id: impl Into<String>, zone_id: impl Into<String>, draft: ShelfDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            category: draft.category,
            zone_id: zone_id.into(),
            is_overlapping: false,
        }
    }
}

impl LayoutShape for Shelf {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    fn is_overlapping(&self) -> bool {
        self.is_overlapping
    }

    fn set_overlapping(&mut self, overlapping: bool) {
        self.is_overlapping = overlapping;
    }
}

/// Shelf data supplied on add; the model assigns the id and zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfDraft {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub category: String,
}

impl ShelfDraft {
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            category: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Partial update merged into an existing shelf. A shelf never changes zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfPatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub category: Option<String>,
}

impl ShelfPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn merged(&self, shelf: &Shelf) -> Shelf {
        let mut out = shelf.clone();
        if let Some(name) = &self.name {
            out.name = name.clone();
        }
        if let Some(category) = &self.category {
            out.category = category.clone();
        }
        out.x = self.x.unwrap_or(shelf.x);
        out.y = self.y.unwrap_or(shelf.y);
        out.width = self.width.unwrap_or(shelf.width);
        out.height = self.height.unwrap_or(shelf.height);
        out
    }
}
