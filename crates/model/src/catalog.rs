//! The component catalog: default property bags and sizes per kind.
//!
//! Defaults mirror the shipped component library; the property editor
//! relies on which keys are present here to decide which form sections a
//! kind gets, so adding a key to a default bag is how a kind grows a
//! capability.

use crate::component::{ComponentKind, NewComponent};
use crate::props::{PropValue, PropertyBag};
use crate::screen::ScreenId;
use forma_core::geometry::{clamp, CANVAS_WIDTH};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Vertical offset for components added from the catalog.
const DEFAULT_DROP_Y: f32 = 100.0;

/// Error for a component type name not present in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKindError {
    pub name: String,
}

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component type: {:?}", self.name)
    }
}

impl Error for UnknownKindError {}

/// A catalog entry: one component kind with its defaults.
#[derive(Clone, Debug)]
pub struct ComponentDefinition {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub default_props: PropertyBag,
    pub default_styles: PropertyBag,
    pub default_width: f32,
    pub default_height: f32,
}

impl ComponentDefinition {
    /// Looks a definition up by its lowercase type name.
    pub fn lookup(name: &str) -> Result<&'static ComponentDefinition, UnknownKindError> {
        let kind = ComponentKind::from_str(name).map_err(|_| UnknownKindError {
            name: name.to_string(),
        })?;
        Ok(definition(kind))
    }

    /// Instantiates a draft on `screen_id`, centered horizontally and at a
    /// fixed vertical offset, position rounded and clamped into canvas
    /// bounds.
    pub fn instantiate(&self, screen_id: ScreenId, layer_order: usize) -> NewComponent {
        let x = (187.0 - self.default_width / 2.0).round();
        NewComponent {
            screen_id,
            kind: self.kind,
            props: self.default_props.clone(),
            styles: self.default_styles.clone(),
            x: clamp(x, 0.0, (CANVAS_WIDTH - self.default_width).max(0.0)),
            y: DEFAULT_DROP_Y,
            width: self.default_width,
            height: self.default_height,
            layer_order,
        }
    }
}

/// Returns the definition for `kind`.
pub fn definition(kind: ComponentKind) -> &'static ComponentDefinition {
    catalog()
        .iter()
        .find(|def| def.kind == kind)
        .unwrap_or_else(|| unreachable!("catalog covers every ComponentKind"))
}

/// The full catalog, in library display order.
pub fn catalog() -> &'static [ComponentDefinition] {
    static CATALOG: OnceLock<Vec<ComponentDefinition>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn bag(entries: &[(&str, PropValue)]) -> PropertyBag {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn build_catalog() -> Vec<ComponentDefinition> {
    use PropValue::Null;

    vec![
        ComponentDefinition {
            kind: ComponentKind::Text,
            name: "Text",
            default_props: bag(&[
                ("text", "Sample Text".into()),
                ("fontSize", 16.into()),
                ("color", "#FFFFFF".into()),
                ("fontWeight", "normal".into()),
                ("fontFamily", "System".into()),
                ("textAlign", "left".into()),
                ("textDecoration", "none".into()),
                ("letterSpacing", 0.into()),
                ("lineHeight", 1.5.into()),
                ("textTransform", "none".into()),
                ("opacity", 1.into()),
                ("backgroundColor", "transparent".into()),
                ("gradientColors", Null),
                ("gradientDirection", "vertical".into()),
                ("paddingHorizontal", 0.into()),
                ("paddingVertical", 0.into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.into()),
                ("shadowRadius", 0.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 2.into()),
                ("rotation", 0.into()),
                ("animation", "none".into()),
                ("animationDuration", 300.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 200.0,
            default_height: 40.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Button,
            name: "Button",
            default_props: bag(&[
                ("text", "Button".into()),
                ("backgroundColor", "#FF9500".into()),
                ("textColor", "#FFFFFF".into()),
                ("fontSize", 16.into()),
                ("fontFamily", "System".into()),
                ("fontWeight", "600".into()),
                ("borderRadius", 8.into()),
                ("opacity", 1.into()),
                ("borderWidth", 0.into()),
                ("borderColor", "#FF9500".into()),
                ("paddingHorizontal", 16.into()),
                ("paddingVertical", 12.into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.3.into()),
                ("shadowRadius", 4.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 2.into()),
                ("rotation", 0.into()),
                ("gradientColors", Null),
                ("gradientDirection", "vertical".into()),
                ("animation", "none".into()),
                ("animationDuration", 300.into()),
                ("action", "none".into()),
                ("navigationTarget", "".into()),
                ("externalUrl", "".into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 150.0,
            default_height: 44.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Input,
            name: "Input Field",
            default_props: bag(&[
                ("placeholder", "Enter text...".into()),
                ("backgroundColor", "#1C1C1E".into()),
                ("textColor", "#FFFFFF".into()),
                ("borderColor", "#3A3A3C".into()),
                ("borderWidth", 1.into()),
                ("borderRadius", 8.into()),
                ("opacity", 1.into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.into()),
                ("shadowRadius", 0.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 0.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 300.0,
            default_height: 44.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Image,
            name: "Image",
            default_props: bag(&[
                (
                    "source",
                    "https://images.pexels.com/photos/1714208/pexels-photo-1714208.jpeg?auto=compress&cs=tinysrgb&w=400"
                        .into(),
                ),
                ("borderRadius", 0.into()),
                ("aspectRatio", "16:9".into()),
                ("opacity", 1.into()),
                ("borderWidth", 0.into()),
                ("borderColor", "#FFFFFF".into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.into()),
                ("shadowRadius", 0.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 0.into()),
                ("filterBrightness", 100.into()),
                ("filterContrast", 100.into()),
                ("filterSaturation", 100.into()),
                ("filterBlur", 0.into()),
                ("filterGrayscale", 0.into()),
                ("filterSepia", 0.into()),
                ("animation", "none".into()),
                ("animationDuration", 300.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 300.0,
            default_height: 200.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Container,
            name: "Container",
            default_props: bag(&[
                ("backgroundColor", "#1C1C1E".into()),
                ("gradientColors", Null),
                ("gradientDirection", "vertical".into()),
                ("borderRadius", 12.into()),
                ("borderColor", "#3A3A3C".into()),
                ("borderWidth", 1.into()),
                ("padding", 16.into()),
                ("opacity", 1.into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.2.into()),
                ("shadowRadius", 8.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 2.into()),
                ("animation", "none".into()),
                ("animationDuration", 300.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 320.0,
            default_height: 200.0,
        },
        ComponentDefinition {
            kind: ComponentKind::List,
            name: "List",
            default_props: bag(&[
                ("itemCount", 5.into()),
                ("itemHeight", 60.into()),
                ("itemBackgroundColor", "#1C1C1E".into()),
                ("itemBorderRadius", 8.into()),
                ("spacing", 8.into()),
                ("opacity", 1.into()),
                ("borderWidth", 0.into()),
                ("borderColor", "#3A3A3C".into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.into()),
                ("shadowRadius", 0.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 0.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 320.0,
            default_height: 340.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Card,
            name: "Card",
            default_props: bag(&[
                ("title", "Card Title".into()),
                ("subtitle", "Card subtitle text".into()),
                ("backgroundColor", "#1C1C1E".into()),
                ("gradientColors", Null),
                ("gradientDirection", "vertical".into()),
                ("borderRadius", 12.into()),
                ("padding", 16.into()),
                ("opacity", 1.into()),
                ("borderWidth", 0.into()),
                ("borderColor", "#3A3A3C".into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.2.into()),
                ("shadowRadius", 8.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 2.into()),
                ("animation", "none".into()),
                ("animationDuration", 300.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 320.0,
            default_height: 120.0,
        },
        ComponentDefinition {
            kind: ComponentKind::Header,
            name: "Header",
            default_props: bag(&[
                ("title", "Screen Title".into()),
                ("backgroundColor", "#000000".into()),
                ("textColor", "#FFFFFF".into()),
                ("fontSize", 20.into()),
                ("fontWeight", "bold".into()),
                ("showBackButton", false.into()),
                ("opacity", 1.into()),
                ("borderWidth", 0.into()),
                ("borderColor", "#3A3A3C".into()),
                ("shadowColor", "#000000".into()),
                ("shadowOpacity", 0.into()),
                ("shadowRadius", 0.into()),
                ("shadowOffsetX", 0.into()),
                ("shadowOffsetY", 0.into()),
            ]),
            default_styles: PropertyBag::new(),
            default_width: 375.0,
            default_height: 60.0,
        },
    ]
}
