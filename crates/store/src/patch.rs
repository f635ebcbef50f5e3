//! Partial-update payloads.
//!
//! Every field is optional; `None` means "leave unchanged". The editor
//! builds the narrowest patch for each commit (a drag-end patches only
//! position, a property edit only the bag).

use model::PropertyBag;
use serde::{Deserialize, Serialize};

/// Partial update for a component row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<PropertyBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<PropertyBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_order: Option<usize>,
}

impl ComponentPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn props(props: PropertyBag) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn layer(layer_order: usize) -> Self {
        Self {
            layer_order: Some(layer_order),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update for a screen row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_home_screen: Option<bool>,
}

impl ScreenPatch {
    pub fn background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
