//! # Property panel schema
//!
//! Schema-driven form generation for the property panel. Given a
//! component, [`build_form`] produces ordered sections of rows, and each
//! row's widget comes from [`control_for`], an eight-step precedence chain
//! keyed on the property's name and value shape. Hosts render the
//! descriptors however they like and funnel every resulting edit through
//! `EditorSession::update_property`.

mod controls;
mod form;

pub use controls::{
    control_for, gradient_seed, normalize_color, PropertyControl, SelectOption, ACTIONS, ANIMATIONS,
    FONT_FAMILIES, FONT_WEIGHTS, GRADIENT_DIRECTIONS, GRADIENT_SEED_END, GRADIENT_SEED_START,
    TEXT_ALIGNS, TEXT_DECORATIONS, TEXT_TRANSFORMS,
};
pub use form::{build_form, wants_image_upload, FormRow, FormSection, Section};
