//! # Forma
//!
//! A host-agnostic engine for direct-manipulation editing of mobile-app
//! screens on a fixed 375×667 canvas: component catalog, drag/resize with
//! snap guides, selection and clipboard, layering, snapshot undo/redo, a
//! schema-driven property form, and best-effort persistence through
//! pluggable store traits. Hosts own rendering and the event loop; they
//! feed pointer and keyboard events to an [`EditorSession`] and draw its
//! state.

pub mod logger;

pub use editor::{
    Alignment, ClipboardItem, Direction, DragState, EditorCommand, EditorError, EditorSession,
    Gesture, GestureOutcome, ResizeHandle, ResizeState, SnapGuides, TemplateComponent, TextEdit,
    CLICK_MAX_DISTANCE, CLICK_MAX_MS, DRAG_THRESHOLD,
};
pub use forma_core::color::Rgba;
pub use forma_core::geometry::{
    CANVAS_CENTER_X, CANVAS_CENTER_Y, CANVAS_HEIGHT, CANVAS_WIDTH, MIN_HEIGHT, MIN_WIDTH,
    SNAP_THRESHOLD,
};
pub use forma_core::keymap::{KeyMap, Keystroke, Modifiers, StandardKeymaps};
pub use history::History;
pub use model::{
    catalog, definition, Component, ComponentDefinition, ComponentId, ComponentKind,
    NewComponent, NewScreen, ProjectId, PropValue, PropertyBag, Screen, ScreenId,
    UnknownKindError,
};
pub use properties::{
    build_form, control_for, gradient_seed, normalize_color, FormRow, FormSection,
    PropertyControl, Section,
};
pub use store::{
    ComponentPatch, ComponentStore, DataUriUploader, ImageStore, MemoryStore, ScreenPatch,
    StoreError,
};

pub use logger::FormaLogger;
