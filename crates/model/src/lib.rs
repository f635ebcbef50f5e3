//! # Component model
//!
//! The in-memory representation of a screen's component tree: typed
//! component kinds with a catalog of default property bags, open
//! string-keyed property maps, and screens. The model is pure data; the
//! editor crate owns mutation, the store crate owns persistence.
//!
//! Components are flat and z-ordered: `layer_order` is a dense, zero-based
//! index among the components of one screen, and a higher index paints
//! later (on top).

mod catalog;
mod component;
mod props;
mod screen;

pub use catalog::{catalog, definition, ComponentDefinition, UnknownKindError};
pub use component::{Component, ComponentId, ComponentKind, NewComponent};
pub use props::{PropValue, PropertyBag};
pub use screen::{NewScreen, ProjectId, Screen, ScreenId};
