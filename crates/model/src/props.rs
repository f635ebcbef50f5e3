//! Open property bags.
//!
//! A component's visual/behavioral attributes live in a string-keyed map
//! whose value *shape* (not a schema) drives the property editor's control
//! choice. The untagged serde representation round-trips the stored JSON
//! exactly: `null`, booleans, numbers, strings, and two-element color-stop
//! lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Gradient color stops (`["#FF9500", "#FF6B00"]`).
    ColorStops(Vec<String>),
}

/// The open key/value map of a component's attributes.
pub type PropertyBag = BTreeMap<String, PropValue>;

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color_stops(&self) -> Option<&[String]> {
        match self {
            PropValue::ColorStops(stops) => Some(stops),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}
