//! Gesture sub-states and resize handles.
//!
//! A pointer gesture owns at most one of two mutually exclusive sub-states
//! at a time, dragging or resizing; [`Gesture`] makes the exclusion
//! structural. Both states record their start values so every move is
//! computed from the gesture origin, never accumulated.

use glam::Vec2;
use model::ComponentId;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Movement below this (per axis, in canvas units) is a click, not a drag.
pub const DRAG_THRESHOLD: f32 = 3.0;

/// A pointer-up within this many milliseconds of pointer-down may still
/// degrade to a click.
pub const CLICK_MAX_MS: u64 = 300;

/// Total pointer travel below this still counts as a click.
pub const CLICK_MAX_DISTANCE: f32 = 5.0;

/// One of the eight resize handles rendered on the selected component.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum ResizeHandle {
    #[serde(rename = "n")]
    #[strum(serialize = "n")]
    North,
    #[serde(rename = "s")]
    #[strum(serialize = "s")]
    South,
    #[serde(rename = "e")]
    #[strum(serialize = "e")]
    East,
    #[serde(rename = "w")]
    #[strum(serialize = "w")]
    West,
    #[serde(rename = "ne")]
    #[strum(serialize = "ne")]
    NorthEast,
    #[serde(rename = "nw")]
    #[strum(serialize = "nw")]
    NorthWest,
    #[serde(rename = "se")]
    #[strum(serialize = "se")]
    SouthEast,
    #[serde(rename = "sw")]
    #[strum(serialize = "sw")]
    SouthWest,
}

impl ResizeHandle {
    /// True if dragging this handle moves the left edge.
    pub fn affects_left(&self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// True if dragging this handle moves the right edge.
    pub fn affects_right(&self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// True if dragging this handle moves the top edge.
    pub fn affects_top(&self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// True if dragging this handle moves the bottom edge.
    pub fn affects_bottom(&self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}

/// Snap guide lines to draw while a drag is active.
///
/// `x` is a vertical guide at that canvas x; `y` a horizontal guide at
/// that canvas y. Cleared on gesture end.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SnapGuides {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl SnapGuides {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// An in-progress move gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState {
    pub id: ComponentId,
    /// Pointer position at pointer-down.
    pub start: Vec2,
    /// Component position at pointer-down.
    pub origin: Vec2,
    pub started_at_ms: u64,
    /// Set once movement exceeds [`DRAG_THRESHOLD`]; only then do moves
    /// mutate the component.
    pub threshold_crossed: bool,
}

/// An in-progress resize gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeState {
    pub id: ComponentId,
    pub handle: ResizeHandle,
    /// Pointer position at pointer-down.
    pub start: Vec2,
    /// Component position at pointer-down.
    pub origin: Vec2,
    pub start_width: f32,
    pub start_height: f32,
}

/// The single active-gesture slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    Drag(DragState),
    Resize(ResizeState),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn eight_handles() {
        assert_eq!(ResizeHandle::iter().count(), 8);
    }

    #[test]
    fn handle_names_round_trip() {
        for handle in ResizeHandle::iter() {
            let name = handle.to_string();
            assert_eq!(ResizeHandle::from_str(&name).unwrap(), handle);
        }
        assert_eq!(ResizeHandle::from_str("nw").unwrap(), ResizeHandle::NorthWest);
    }

    #[test]
    fn corner_handles_affect_both_axes() {
        assert!(ResizeHandle::NorthWest.affects_left());
        assert!(ResizeHandle::NorthWest.affects_top());
        assert!(!ResizeHandle::NorthWest.affects_right());
        assert!(ResizeHandle::East.affects_right());
        assert!(!ResizeHandle::East.affects_top());
        assert!(ResizeHandle::South.affects_bottom());
    }
}
