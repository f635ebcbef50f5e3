//! Components: the positioned, typed elements of a screen.

use crate::props::PropertyBag;
use crate::screen::ScreenId;
use forma_core::geometry::{clamp, CANVAS_HEIGHT, CANVAS_WIDTH};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Unique identifier for a component. Assigned by the persistence
/// collaborator on creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub Uuid);

impl ComponentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component-{}", self.0)
    }
}

/// The closed set of component types.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComponentKind {
    Text,
    Button,
    Input,
    Image,
    Container,
    List,
    Card,
    Header,
}

/// A positioned component on a screen.
///
/// Invariants: `0 <= x` and `x + width <= 375`; `0 <= y` and
/// `y + height <= 667`; `layer_order` is dense and unique within the
/// screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub screen_id: ScreenId,
    pub kind: ComponentKind,
    pub props: PropertyBag,
    pub styles: PropertyBag,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layer_order: usize,
}

impl Component {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest x the component may occupy without leaving the canvas.
    pub fn max_x(&self) -> f32 {
        CANVAS_WIDTH - self.width
    }

    /// Largest y the component may occupy without leaving the canvas.
    pub fn max_y(&self) -> f32 {
        CANVAS_HEIGHT - self.height
    }

    /// Copies this component's content into a draft at `offset` from the
    /// original, clamped into canvas bounds. Identity fields are stripped;
    /// the store assigns a fresh id on insert.
    pub fn duplicate(&self, offset: Vec2, layer_order: usize) -> NewComponent {
        NewComponent {
            screen_id: self.screen_id,
            kind: self.kind,
            props: self.props.clone(),
            styles: self.styles.clone(),
            x: clamp(self.x + offset.x, 0.0, self.max_x()),
            y: clamp(self.y + offset.y, 0.0, self.max_y()),
            width: self.width,
            height: self.height,
            layer_order,
        }
    }
}

/// A component draft awaiting an id from the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComponent {
    pub screen_id: ScreenId,
    pub kind: ComponentKind,
    pub props: PropertyBag,
    pub styles: PropertyBag,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layer_order: usize,
}

impl NewComponent {
    /// Attaches a server-assigned id, producing the stored component.
    pub fn with_id(self, id: ComponentId) -> Component {
        Component {
            id,
            screen_id: self.screen_id,
            kind: self.kind,
            props: self.props,
            styles: self.styles,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            layer_order: self.layer_order,
        }
    }
}
