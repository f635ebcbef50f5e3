//! # Forma core
//!
//! Shared primitives for the Forma canvas engine: the fixed virtual canvas
//! geometry, color parsing, and keyboard shortcut types. Everything here is
//! pure and host-agnostic; no crate in the workspace sits below this one.

pub mod color;
pub mod geometry;
pub mod keymap;
