//! # Editor session
//!
//! The mutation engine for one editing session: selection, clipboard,
//! layering, alignment, the pointer drag/resize state machine with snap
//! guides, keyboard dispatch, and the single `update_property` entry point
//! the property form funnels edits through.
//!
//! Hosts drive an [`EditorSession`] with pointer and keyboard events and
//! read its state back out each frame; rendering is entirely theirs.
//! Every committed mutation becomes one history snapshot and one
//! best-effort call to the persistence collaborator.

mod command;
mod error;
mod gesture;
mod interactivity;
mod keyboard;
mod session;

pub use command::{Alignment, Direction, EditorCommand};
pub use error::EditorError;
pub use gesture::GestureOutcome;
pub use interactivity::{
    DragState, Gesture, ResizeHandle, ResizeState, SnapGuides, CLICK_MAX_DISTANCE, CLICK_MAX_MS,
    DRAG_THRESHOLD,
};
pub use session::{ClipboardItem, EditorSession, TemplateComponent, TextEdit};
