//! Geometry for the fixed virtual canvas.
//!
//! All coordinates are canvas-space units on a 375×667 surface (one iPhone
//! SE-class screen). Positions and sizes are carried as `f32` during a
//! gesture and rounded to whole units at commit time.

use glam::Vec2;

/// Width of the virtual canvas in canvas units.
pub const CANVAS_WIDTH: f32 = 375.0;

/// Height of the virtual canvas in canvas units.
pub const CANVAS_HEIGHT: f32 = 667.0;

/// Horizontal center line of the canvas.
pub const CANVAS_CENTER_X: f32 = CANVAS_WIDTH / 2.0;

/// Vertical center line of the canvas.
pub const CANVAS_CENTER_Y: f32 = CANVAS_HEIGHT / 2.0;

/// Distance in canvas units within which an edge snaps to a guide.
pub const SNAP_THRESHOLD: f32 = 5.0;

/// Smallest width a component may be resized to.
pub const MIN_WIDTH: f32 = 30.0;

/// Smallest height a component may be resized to.
pub const MIN_HEIGHT: f32 = 20.0;

/// Clamps `value` into `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Offset that centers an item of `item_size` inside `canvas_size`.
pub fn center_offset(canvas_size: f32, item_size: f32) -> f32 {
    canvas_size / 2.0 - item_size / 2.0
}

/// Returns `target` when `edge` is within `threshold` of it.
pub fn snap_candidate(edge: f32, target: f32, threshold: f32) -> Option<f32> {
    if (edge - target).abs() < threshold {
        Some(target)
    } else {
        None
    }
}

/// Rounds a canvas coordinate to the nearest whole unit.
pub fn round_unit(value: f32) -> f32 {
    value.round()
}

/// Rounds both axes of a point to whole units.
pub fn round_point(point: Vec2) -> Vec2 {
    Vec2::new(point.x.round(), point.y.round())
}

/// Resolves horizontal snapping for a dragged component.
///
/// Candidates are checked in priority order: horizontal center, left edge,
/// right edge. At most one guide wins. Returns the (possibly snapped) x
/// and the guide line to draw, if any.
pub fn snap_horizontal(x: f32, width: f32) -> (f32, Option<f32>) {
    if snap_candidate(x + width / 2.0, CANVAS_CENTER_X, SNAP_THRESHOLD).is_some() {
        (CANVAS_CENTER_X - width / 2.0, Some(CANVAS_CENTER_X))
    } else if snap_candidate(x, 0.0, SNAP_THRESHOLD).is_some() {
        (0.0, Some(0.0))
    } else if snap_candidate(x + width, CANVAS_WIDTH, SNAP_THRESHOLD).is_some() {
        (CANVAS_WIDTH - width, Some(CANVAS_WIDTH))
    } else {
        (x, None)
    }
}

/// Resolves vertical snapping for a dragged component.
///
/// Top edge wins over bottom edge; there is no vertical-center guide.
pub fn snap_vertical(y: f32, height: f32) -> (f32, Option<f32>) {
    if snap_candidate(y, 0.0, SNAP_THRESHOLD).is_some() {
        (0.0, Some(0.0))
    } else if snap_candidate(y + height, CANVAS_HEIGHT, SNAP_THRESHOLD).is_some() {
        (CANVAS_HEIGHT - height, Some(CANVAS_HEIGHT))
    } else {
        (y, None)
    }
}
