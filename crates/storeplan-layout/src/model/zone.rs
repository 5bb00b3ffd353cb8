use serde::{Deserialize, Serialize};

use super::LayoutShape;
use crate::geometry::Rect;

/// A named rectangular region of the store floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display color, e.g. `#4f9dde`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_overlapping: bool,
}

impl Zone {
    pub fn from_draft(id: impl Into<String>, draft: ZoneDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            color: draft.color,
            is_overlapping: false,
        }
    }
}

impl LayoutShape for Zone {
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

/// Zone data supplied on add; the model assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDraft {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub color: String,
}

impl ZoneDraft {
    pub fn new(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            color: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<&Zone> for ZoneDraft {
    fn from(zone: &Zone) -> Self {
        Self {
            name: zone.name.clone(),
            x: zone.x,
            y: zone.y,
            width: zone.width,
            height: zone.height,
            color: zone.color.clone(),
        }
    }
}

/// Partial update merged into an existing zone. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
}

impl ZonePatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn rect(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Self::default()
        }
    }

    /// Returns the zone with this patch merged in, leaving `zone` untouched.
    pub fn merged(&self, zone: &Zone) -> Zone {
        let mut out = zone.clone();
        if let Some(name) = &self.name {
            out.name = name.clone();
        }
        if let Some(color) = &self.color {
            out.color = color.clone();
        }
        out.x = self.x.unwrap_or(zone.x);
        out.y = self.y.unwrap_or(zone.y);
        out.width = self.width.unwrap_or(zone.width);
        out.height = self.height.unwrap_or(zone.height);
        out
    }
}
