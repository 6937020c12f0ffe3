//! Attribute values for graphical elements
//!
//! Shape attributes are free-form: any SVG presentation attribute may be
//! passed through to the renderer. They are restricted to a small closed set
//! of scalar types so that every attribute map encodes to flat JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered attribute map, name -> value.
///
/// Insertion order is preserved so that encoding the same map twice always
/// yields the same JSON text.
pub type Attributes = IndexMap<String, AttrValue>;

/// A single attribute value
///
/// Serializes as a bare JSON scalar (`5`, `0.5`, `"red"`, `true`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// UTF-8 string
    Str(String),
}

impl AttrValue {
    /// Returns true if this is a numeric value (Int or Float).
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, AttrValue::Int(_) | AttrValue::Float(_))
    }

    /// Try to convert to f64, coercing from Int if needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<&String> for AttrValue {
    fn from(v: &String) -> Self {
        AttrValue::Str(v.clone())
    }
}

/// Build an [`Attributes`] map from `name => value` pairs.
///
/// Values go through `AttrValue::from`, so any supported scalar works.
///
/// ```rust
/// use vellum_core::{attrs, AttrValue};
///
/// let a = attrs! { "cx" => 10, "fill" => "none", "visible" => true };
/// assert_eq!(a["cx"], AttrValue::Int(10));
/// assert_eq!(a.get_index(1).map(|(k, _)| k.as_str()), Some("fill"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Attributes::new();
        $(
            map.insert(::std::string::String::from($name), $crate::AttrValue::from($value));
        )+
        map
    }};
}
