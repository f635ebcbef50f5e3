//! Section model for the property panel.
//!
//! [`build_form`] turns one component into an ordered list of sections,
//! each holding the rows to render. Sections appear only when the bag
//! holds a relevant key, so the form stays proportional to the component
//! kind without a static kind-to-form table. Collapsing is per section;
//! hosts keep the expand state and seed it from
//! [`Section::default_expanded`].

use crate::controls::{control_for, PropertyControl};
use model::{Component, ComponentKind};
use strum_macros::{Display, EnumIter};

/// Typography, transform, effects, gradient, filter, animation, and
/// interaction keys are rendered by their dedicated sections; the generic
/// Properties section shows everything else.
const CLAIMED_KEYS: &[&str] = &[
    "opacity",
    "borderWidth",
    "borderColor",
    "shadowOpacity",
    "shadowRadius",
    "shadowColor",
    "shadowOffsetX",
    "shadowOffsetY",
    "fontFamily",
    "fontWeight",
    "textAlign",
    "textDecoration",
    "textTransform",
    "letterSpacing",
    "lineHeight",
    "rotation",
    "paddingHorizontal",
    "paddingVertical",
    "gradientColors",
    "gradientDirection",
    "animation",
    "animationDuration",
    "action",
    "navigationTarget",
    "externalUrl",
    "filterBrightness",
    "filterContrast",
    "filterSaturation",
    "filterBlur",
    "filterGrayscale",
    "filterSepia",
];

const TYPOGRAPHY_KEYS: &[&str] = &[
    "fontFamily",
    "fontSize",
    "fontWeight",
    "textAlign",
    "textDecoration",
    "textTransform",
    "letterSpacing",
    "lineHeight",
];

const FILTER_KEYS: &[&str] = &[
    "filterBrightness",
    "filterContrast",
    "filterSaturation",
    "filterBlur",
    "filterGrayscale",
    "filterSepia",
];

/// The panel's sections, in render order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Section {
    Position,
    Size,
    Layer,
    Typography,
    Transform,
    Effects,
    Properties,
    Gradient,
    Filters,
    Animation,
    Interactions,
}

impl Section {
    /// Whether the section starts expanded.
    pub fn default_expanded(&self) -> bool {
        matches!(self, Self::Position | Self::Size | Self::Properties)
    }
}

/// One rendered row: a property key and its control.
#[derive(Clone, Debug, PartialEq)]
pub struct FormRow {
    pub key: String,
    pub control: PropertyControl,
}

impl FormRow {
    fn new(component: &Component, key: &str) -> Option<Self> {
        let value = component.props.get(key)?;
        Some(Self {
            key: key.to_string(),
            control: control_for(component.kind, key, value),
        })
    }
}

/// One section with its rows.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSection {
    pub section: Section,
    pub rows: Vec<FormRow>,
}

/// Builds the full form for one component.
///
/// Position, Size, and Layer carry no property rows; they edit geometry
/// and stacking directly (`set_position`, `set_size`, `layer_up/down`).
pub fn build_form(component: &Component) -> Vec<FormSection> {
    let props = &component.props;
    let mut sections = vec![
        FormSection {
            section: Section::Position,
            rows: Vec::new(),
        },
        FormSection {
            section: Section::Size,
            rows: Vec::new(),
        },
        FormSection {
            section: Section::Layer,
            rows: Vec::new(),
        },
    ];

    if props.contains_key("fontFamily") || props.contains_key("fontSize") {
        let rows = TYPOGRAPHY_KEYS
            .iter()
            .filter_map(|key| FormRow::new(component, key))
            .collect();
        sections.push(FormSection {
            section: Section::Typography,
            rows,
        });
    }

    if props.contains_key("rotation") {
        let mut rows = Vec::new();
        rows.extend(FormRow::new(component, "rotation"));
        rows.extend(FormRow::new(component, "paddingHorizontal"));
        rows.extend(FormRow::new(component, "paddingVertical"));
        sections.push(FormSection {
            section: Section::Transform,
            rows,
        });
    }

    let effects = effects_rows(component);
    if !effects.is_empty() {
        sections.push(FormSection {
            section: Section::Effects,
            rows: effects,
        });
    }

    let generic: Vec<FormRow> = props
        .keys()
        .filter(|key| !CLAIMED_KEYS.contains(&key.as_str()))
        .filter_map(|key| FormRow::new(component, key))
        .collect();
    sections.push(FormSection {
        section: Section::Properties,
        rows: generic,
    });

    if props.contains_key("gradientColors") {
        let mut rows = Vec::new();
        rows.extend(FormRow::new(component, "gradientColors"));
        let enabled = props
            .get("gradientColors")
            .and_then(|v| v.as_color_stops())
            .is_some();
        if enabled {
            rows.extend(FormRow::new(component, "gradientDirection"));
        }
        sections.push(FormSection {
            section: Section::Gradient,
            rows,
        });
    }

    if props.contains_key("filterBrightness") || props.contains_key("filterContrast") {
        let rows = FILTER_KEYS
            .iter()
            .filter_map(|key| FormRow::new(component, key))
            .collect();
        sections.push(FormSection {
            section: Section::Filters,
            rows,
        });
    }

    if props.contains_key("animation") {
        let mut rows = Vec::new();
        rows.extend(FormRow::new(component, "animation"));
        let animating = props.get("animation").and_then(|v| v.as_text()) != Some("none");
        if animating {
            rows.extend(FormRow::new(component, "animationDuration"));
        }
        sections.push(FormSection {
            section: Section::Animation,
            rows,
        });
    }

    if props.contains_key("action") {
        let mut rows = Vec::new();
        rows.extend(FormRow::new(component, "action"));
        match props.get("action").and_then(|v| v.as_text()) {
            Some("navigate") => rows.extend(FormRow::new(component, "navigationTarget")),
            Some("external") => rows.extend(FormRow::new(component, "externalUrl")),
            _ => {}
        }
        sections.push(FormSection {
            section: Section::Interactions,
            rows,
        });
    }

    sections
}

/// The Effects section renders opacity and shadow opacity as percentage
/// sliders rather than steppers, and reveals the dependent border/shadow
/// rows only when their gate value is nonzero.
fn effects_rows(component: &Component) -> Vec<FormRow> {
    let props = &component.props;
    let mut rows = Vec::new();

    if props.contains_key("opacity") {
        rows.push(FormRow {
            key: "opacity".to_string(),
            control: unit_slider(),
        });
    }

    if props.contains_key("borderWidth") {
        rows.extend(FormRow::new(component, "borderWidth"));
        let visible = props
            .get("borderWidth")
            .and_then(|v| v.as_number())
            .unwrap_or(0.0)
            > 0.0;
        if visible {
            rows.extend(FormRow::new(component, "borderColor"));
        }
    }

    if props.contains_key("shadowOpacity") {
        rows.push(FormRow {
            key: "shadowOpacity".to_string(),
            control: unit_slider(),
        });
        let visible = props
            .get("shadowOpacity")
            .and_then(|v| v.as_number())
            .unwrap_or(0.0)
            > 0.0;
        if visible {
            rows.extend(FormRow::new(component, "shadowRadius"));
            rows.extend(FormRow::new(component, "shadowColor"));
            rows.extend(FormRow::new(component, "shadowOffsetX"));
            rows.extend(FormRow::new(component, "shadowOffsetY"));
        }
    }

    rows
}

fn unit_slider() -> PropertyControl {
    PropertyControl::Slider {
        min: 0.0,
        max: 1.0,
        step: 0.01,
        unit: "%",
    }
}

/// True when the panel should embed the upload flow for this component.
pub fn wants_image_upload(component: &Component) -> bool {
    component.kind == ComponentKind::Image && component.props.contains_key("source")
}
