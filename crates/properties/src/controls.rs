//! Per-key control dispatch.
//!
//! [`control_for`] maps one (kind, key, value) triple to the widget the
//! property panel renders for it. The chain is checked in a fixed
//! precedence order and the first match wins; catalog additions rely on
//! falling through this chain, so reordering it changes which widget old
//! keys get.

use forma_core::color::{is_transparent, parse_color};
use model::{ComponentKind, PropValue, PropertyBag};

/// One entry in a closed option list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const FONT_FAMILIES: &[SelectOption] = &[
    opt("System", "System"),
    opt("SF Pro", "SF Pro"),
    opt("Helvetica", "Helvetica"),
    opt("Arial", "Arial"),
    opt("Roboto", "Roboto"),
    opt("Montserrat", "Montserrat"),
    opt("Lato", "Lato"),
    opt("Open Sans", "Open Sans"),
    opt("Poppins", "Poppins"),
    opt("Playfair Display", "Playfair Display"),
    opt("Georgia", "Georgia"),
    opt("Courier", "Courier"),
];

pub const FONT_WEIGHTS: &[SelectOption] = &[
    opt("100", "Thin (100)"),
    opt("200", "Extra Light (200)"),
    opt("300", "Light (300)"),
    opt("normal", "Normal (400)"),
    opt("500", "Medium (500)"),
    opt("600", "Semi Bold (600)"),
    opt("bold", "Bold (700)"),
    opt("800", "Extra Bold (800)"),
    opt("900", "Black (900)"),
];

pub const TEXT_ALIGNS: &[SelectOption] = &[
    opt("left", "Left"),
    opt("center", "Center"),
    opt("right", "Right"),
    opt("justify", "Justify"),
];

pub const TEXT_DECORATIONS: &[SelectOption] = &[
    opt("none", "None"),
    opt("underline", "Underline"),
    opt("line-through", "Strike Through"),
    opt("underline line-through", "Underline + Strike"),
];

pub const TEXT_TRANSFORMS: &[SelectOption] = &[
    opt("none", "None"),
    opt("uppercase", "UPPERCASE"),
    opt("lowercase", "lowercase"),
    opt("capitalize", "Capitalize"),
];

pub const GRADIENT_DIRECTIONS: &[SelectOption] = &[
    opt("vertical", "Vertical"),
    opt("horizontal", "Horizontal"),
    opt("diagonal", "Diagonal"),
    opt("radial", "Radial"),
];

pub const ANIMATIONS: &[SelectOption] = &[
    opt("none", "None"),
    opt("fadeIn", "Fade In"),
    opt("slideUp", "Slide Up"),
    opt("slideDown", "Slide Down"),
    opt("slideLeft", "Slide Left"),
    opt("slideRight", "Slide Right"),
    opt("scale", "Scale"),
    opt("bounce", "Bounce"),
    opt("pulse", "Pulse"),
];

pub const ACTIONS: &[SelectOption] = &[
    opt("none", "None"),
    opt("navigate", "Navigate to Screen"),
    opt("back", "Go Back"),
    opt("external", "Open URL"),
    opt("submit", "Submit Form"),
];

/// Default pair seeded when a gradient is first enabled; the first stop
/// prefers the component's current background color.
pub const GRADIENT_SEED_END: &str = "#FF6B00";
pub const GRADIENT_SEED_START: &str = "#FF9500";

/// The widget to render for one property key.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyControl {
    /// Delegates to the upload collaborator; the returned URL becomes the
    /// new value.
    ImagePicker,
    /// Single choice out of a closed option list.
    Select { options: &'static [SelectOption] },
    /// Two-stop gradient editor when stops are set, or an enable
    /// affordance seeding [`gradient_seed`] when the value is null.
    Gradient { stops: Option<[String; 2]> },
    Toggle,
    /// Bounded range input. `unit` is the display suffix.
    Slider {
        min: f32,
        max: f32,
        step: f32,
        unit: &'static str,
    },
    /// Free numeric input with a key-specific increment.
    Stepper { step: f32 },
    /// Swatch plus hex text. The background-color key additionally gets a
    /// transparent/opaque toggle.
    ColorField { allow_transparent: bool },
    TextField,
}

/// The stops to seed when enabling a gradient on this bag.
pub fn gradient_seed(props: &PropertyBag) -> [String; 2] {
    let start = props
        .get("backgroundColor")
        .and_then(|v| v.as_text())
        .filter(|c| !is_transparent(c))
        .unwrap_or(GRADIENT_SEED_START);
    [start.to_string(), GRADIENT_SEED_END.to_string()]
}

/// Canonicalizes the hex-text half of a color field into the swatch form.
///
/// Accepts anything [`parse_color`] understands and returns the uppercase
/// `#RRGGBB` value to write back; `transparent` is passed through so the
/// background-color toggle round-trips. Returns `None` for text that does
/// not parse, in which case the edit is withheld.
pub fn normalize_color(input: &str) -> Option<String> {
    if is_transparent(input) {
        return Some("transparent".to_string());
    }
    parse_color(input).map(|color| color.to_hex())
}

/// Picks the control for one property key. First match wins.
pub fn control_for(kind: ComponentKind, key: &str, value: &PropValue) -> PropertyControl {
    // 1. Image source on image components goes through the uploader.
    if key == "source" && kind == ComponentKind::Image {
        return PropertyControl::ImagePicker;
    }

    // 2. Closed-enum keys.
    if let Some(options) = fixed_options(key) {
        return PropertyControl::Select { options };
    }

    // 3. The gradient pair.
    if key == "gradientColors" {
        let stops = value.as_color_stops().and_then(|stops| match stops {
            [start, end] => Some([start.clone(), end.clone()]),
            _ => None,
        });
        return PropertyControl::Gradient { stops };
    }

    // 4. Booleans.
    if value.as_bool().is_some() {
        return PropertyControl::Toggle;
    }

    // 5. Filter sliders.
    if let Some(filter) = key.strip_prefix("filter") {
        let percentage = matches!(
            filter,
            "Brightness" | "Contrast" | "Saturation" | "Grayscale" | "Sepia"
        );
        let max = if percentage {
            200.0
        } else if filter == "Blur" {
            10.0
        } else {
            100.0
        };
        return PropertyControl::Slider {
            min: 0.0,
            max,
            step: if percentage { 1.0 } else { 0.5 },
            unit: if percentage { "%" } else { "px" },
        };
    }

    // 6. Numeric values and semantically numeric keys.
    if value.as_number().is_some() || numeric_key(key) {
        return PropertyControl::Stepper {
            step: stepper_step(key),
        };
    }

    // 7. Color keys.
    if key.to_lowercase().contains("color") {
        return PropertyControl::ColorField {
            allow_transparent: key == "backgroundColor",
        };
    }

    // 8. Everything else is free text.
    PropertyControl::TextField
}

fn fixed_options(key: &str) -> Option<&'static [SelectOption]> {
    match key {
        "fontFamily" => Some(FONT_FAMILIES),
        "fontWeight" => Some(FONT_WEIGHTS),
        "textAlign" => Some(TEXT_ALIGNS),
        "textDecoration" => Some(TEXT_DECORATIONS),
        "textTransform" => Some(TEXT_TRANSFORMS),
        "gradientDirection" => Some(GRADIENT_DIRECTIONS),
        "animation" => Some(ANIMATIONS),
        "action" => Some(ACTIONS),
        _ => None,
    }
}

fn numeric_key(key: &str) -> bool {
    key.contains("letterSpacing")
        || key.contains("lineHeight")
        || key.contains("rotation")
        || key.contains("animationDuration")
}

fn stepper_step(key: &str) -> f32 {
    match key {
        "letterSpacing" | "lineHeight" => 0.1,
        "rotation" => 1.0,
        "animationDuration" => 100.0,
        _ => 1.0,
    }
}
