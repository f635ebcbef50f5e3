//! Pointer event handling: the drag/resize state machine.
//!
//! Hosts translate raw pointer events into canvas coordinates and call
//! [`EditorSession::pointer_down`], [`pointer_move`] and [`pointer_up`]
//! (plus [`resize_start`] when the pointer lands on a handle). Nothing is
//! committed until pointer-up; moves mutate the live component so hosts
//! render the gesture in flight, but only the final position becomes a
//! history snapshot and a store write.
//!
//! [`pointer_move`]: EditorSession::pointer_move
//! [`pointer_up`]: EditorSession::pointer_up
//! [`resize_start`]: EditorSession::resize_start

use crate::interactivity::{
    DragState, Gesture, ResizeHandle, ResizeState, CLICK_MAX_DISTANCE, CLICK_MAX_MS,
    DRAG_THRESHOLD,
};
use crate::session::EditorSession;
use forma_core::geometry::{
    clamp, round_point, round_unit, snap_horizontal, snap_vertical, CANVAS_HEIGHT, CANVAS_WIDTH,
    MIN_HEIGHT, MIN_WIDTH,
};
use glam::Vec2;
use model::ComponentId;
use store::{ComponentPatch, ComponentStore};

/// What a completed pointer gesture turned out to be.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// No gesture was active, or the component vanished mid-gesture.
    Ignored,
    /// The pointer never crossed the drag threshold and released quickly:
    /// a plain selection click.
    Click(ComponentId),
    /// A drag ended; the final position was committed.
    Moved(ComponentId),
    /// A resize ended; the final bounds were committed.
    Resized(ComponentId),
}

impl<S: ComponentStore> EditorSession<S> {
    /// Pointer-down on a component body: selects it and arms a drag.
    pub fn pointer_down(&mut self, id: ComponentId, position: Vec2, time_ms: u64) {
        let Some(component) = self.component(id) else {
            return;
        };
        let origin = component.position();
        self.select(Some(id));
        self.gesture = Some(Gesture::Drag(DragState {
            id,
            start: position,
            origin,
            started_at_ms: time_ms,
            threshold_crossed: false,
        }));
    }

    /// Pointer-down on a resize handle: selects the component and arms a
    /// resize. Start bounds are recorded so every move derives from them.
    pub fn resize_start(&mut self, id: ComponentId, handle: ResizeHandle, position: Vec2) {
        let Some(component) = self.component(id) else {
            return;
        };
        let (origin, start_width, start_height) =
            (component.position(), component.width, component.height);
        self.select(Some(id));
        self.gesture = Some(Gesture::Resize(ResizeState {
            id,
            handle,
            start: position,
            origin,
            start_width,
            start_height,
        }));
    }

    /// Pointer movement while a gesture is armed or active.
    pub fn pointer_move(&mut self, position: Vec2) {
        match self.gesture {
            Some(Gesture::Drag(drag)) => self.drag_move(drag, position),
            Some(Gesture::Resize(resize)) => self.resize_move(resize, position),
            None => {}
        }
    }

    fn drag_move(&mut self, drag: DragState, position: Vec2) {
        let delta = position - drag.start;

        if !drag.threshold_crossed {
            if delta.x.abs() <= DRAG_THRESHOLD && delta.y.abs() <= DRAG_THRESHOLD {
                return;
            }
            self.gesture = Some(Gesture::Drag(DragState {
                threshold_crossed: true,
                ..drag
            }));
        }

        let Some(component) = self.component(drag.id) else {
            return;
        };
        let (width, height) = (component.width, component.height);

        let x = clamp(drag.origin.x + delta.x, 0.0, CANVAS_WIDTH - width);
        let y = clamp(drag.origin.y + delta.y, 0.0, CANVAS_HEIGHT - height);
        let (x, guide_x) = snap_horizontal(x, width);
        let (y, guide_y) = snap_vertical(y, height);
        self.snap_guides.x = guide_x;
        self.snap_guides.y = guide_y;

        if let Some(component) = self.component_mut(drag.id) {
            let position = round_point(Vec2::new(x, y));
            component.x = position.x;
            component.y = position.y;
        }
    }

    fn resize_move(&mut self, resize: ResizeState, position: Vec2) {
        let delta = position - resize.start;
        let Some(component) = self.component_mut(resize.id) else {
            return;
        };

        if resize.handle.affects_right() {
            component.width = round_unit(clamp(
                resize.start_width + delta.x,
                MIN_WIDTH,
                CANVAS_WIDTH - resize.origin.x,
            ));
        }
        if resize.handle.affects_bottom() {
            component.height = round_unit(clamp(
                resize.start_height + delta.y,
                MIN_HEIGHT,
                CANVAS_HEIGHT - resize.origin.y,
            ));
        }
        if resize.handle.affects_left() {
            // Consume only as much delta as the left edge and the width
            // floor allow, rounded once so edge and size move in lockstep
            // and x + width never drifts past the gesture's start sum.
            let consumed =
                round_unit(clamp(delta.x, -resize.origin.x, resize.start_width - MIN_WIDTH));
            component.x = resize.origin.x + consumed;
            component.width = resize.start_width - consumed;
        }
        if resize.handle.affects_top() {
            let consumed =
                round_unit(clamp(delta.y, -resize.origin.y, resize.start_height - MIN_HEIGHT));
            component.y = resize.origin.y + consumed;
            component.height = resize.start_height - consumed;
        }
    }

    /// Pointer-up: resolves the gesture into a click, a committed move, or
    /// a committed resize, and clears all gesture state.
    pub fn pointer_up(&mut self, position: Vec2, time_ms: u64) -> GestureOutcome {
        let gesture = self.gesture.take();
        self.snap_guides.clear();

        match gesture {
            None => GestureOutcome::Ignored,
            Some(Gesture::Drag(drag)) => {
                if drag.threshold_crossed {
                    let Some(component) = self.component(drag.id) else {
                        return GestureOutcome::Ignored;
                    };
                    let (x, y) = (component.x, component.y);
                    self.commit();
                    self.persist(drag.id, ComponentPatch::position(x, y));
                    return GestureOutcome::Moved(drag.id);
                }

                let travel = (position - drag.start).length();
                let elapsed = time_ms.saturating_sub(drag.started_at_ms);
                if elapsed < CLICK_MAX_MS && travel < CLICK_MAX_DISTANCE {
                    GestureOutcome::Click(drag.id)
                } else {
                    GestureOutcome::Ignored
                }
            }
            Some(Gesture::Resize(resize)) => {
                let Some(component) = self.component(resize.id) else {
                    return GestureOutcome::Ignored;
                };
                let patch = ComponentPatch::bounds(
                    component.x,
                    component.y,
                    component.width,
                    component.height,
                );
                self.commit();
                self.persist(resize.id, patch);
                GestureOutcome::Resized(resize.id)
            }
        }
    }
}
