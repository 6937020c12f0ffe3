//! Graphical elements
//!
//! An [`Element`] is one shape: an [`ElementKind`] plus the SVG attributes it
//! should be rendered with. Attribute names and values are passed through to
//! the renderer untouched; only the parameters a shape cannot do without
//! (the arc's radii and angles, the text's content) are taken positionally.
//!
//! On the wire an element is a flat JSON object whose `_t` entry carries the
//! kind's short tag:
//!
//! ```rust
//! use vellum_core::attrs;
//! use vellum_graphics::element::circle;
//!
//! let c = circle(attrs! { "cx" => 10, "cy" => 10, "r" => 5 });
//! assert_eq!(c.to_json().unwrap(), r#"{"cx":10,"cy":10,"r":5,"_t":"c"}"#);
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use vellum_core::{from_json, to_json, AttrValue, Attributes};

use crate::error::{GraphicsError, Result};

/// Wire name of the kind tag
pub const KIND_ATTRIBUTE: &str = "_t";

/// The shape an element draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Circular or annular sector centered at the origin
    Arc,
    /// Circle from `cx`, `cy`, `r`
    Circle,
    /// Ellipse from `cx`, `cy`, `rx`, `ry`
    Ellipse,
    /// Raster image referenced by `href`
    Image,
    /// Straight segment from (`x1`, `y1`) to (`x2`, `y2`)
    Line,
    /// Outline given as SVG path data in `d`
    Path,
    /// Closed shape through `points`
    Polygon,
    /// Open polyline through `points`
    Polyline,
    /// Rectangle, optionally with rounded corners
    Rect,
    /// Text run, content in `text`
    Text,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Arc,
        ElementKind::Circle,
        ElementKind::Ellipse,
        ElementKind::Image,
        ElementKind::Line,
        ElementKind::Path,
        ElementKind::Polygon,
        ElementKind::Polyline,
        ElementKind::Rect,
        ElementKind::Text,
    ];

    /// Short discriminator written to the wire
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Arc => "a",
            ElementKind::Circle => "c",
            ElementKind::Ellipse => "e",
            ElementKind::Image => "i",
            ElementKind::Line => "l",
            ElementKind::Path => "p",
            ElementKind::Polygon => "pg",
            ElementKind::Polyline => "pl",
            ElementKind::Rect => "r",
            ElementKind::Text => "t",
        }
    }

    /// Human-readable kind name
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Arc => "arc",
            ElementKind::Circle => "circle",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Image => "image",
            ElementKind::Line => "line",
            ElementKind::Path => "path",
            ElementKind::Polygon => "polygon",
            ElementKind::Polyline => "polyline",
            ElementKind::Rect => "rect",
            ElementKind::Text => "text",
        }
    }

    /// Attributes every element of this kind carries
    pub fn required_attributes(self) -> &'static [&'static str] {
        match self {
            ElementKind::Arc => &["r1", "r2", "a1", "a2"],
            ElementKind::Text => &["text"],
            _ => &[],
        }
    }

    /// Look up a kind by its wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// One graphical element. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attributes: Attributes,
}

impl Element {
    /// Build an element of `kind`.
    ///
    /// `_t` is reserved for the kind tag; an attribute with that name is
    /// dropped.
    pub(crate) fn new(kind: ElementKind, mut attributes: Attributes) -> Self {
        if attributes.shift_remove(KIND_ATTRIBUTE).is_some() {
            tracing::warn!(
                kind = kind.name(),
                "dropping reserved `{KIND_ATTRIBUTE}` attribute"
            );
        }
        Self { kind, attributes }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get one attribute by name
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Encode to the wire form (attributes, then `_t`)
    pub fn to_json(&self) -> Result<String> {
        Ok(to_json(self)?)
    }

    /// Decode from the wire form.
    ///
    /// Fails if the tag is missing or unknown, or if an attribute the kind
    /// requires is absent.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut attributes: Attributes = from_json(json)?;
        let kind = match attributes.shift_remove(KIND_ATTRIBUTE) {
            Some(AttrValue::Str(tag)) => {
                ElementKind::from_tag(&tag).ok_or(GraphicsError::UnknownElementType(tag))?
            }
            Some(other) => {
                return Err(GraphicsError::UnknownElementType(format!("{other:?}")));
            }
            None => return Err(GraphicsError::MissingElementType),
        };
        if let Some(name) = kind
            .required_attributes()
            .iter()
            .copied()
            .find(|name| !attributes.contains_key(*name))
        {
            return Err(GraphicsError::MissingAttribute {
                kind: kind.name(),
                name,
            });
        }
        Ok(Self { kind, attributes })
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 1))?;
        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(KIND_ATTRIBUTE, self.kind.tag())?;
        map.end()
    }
}

/// Kind name of an element
pub fn type_of(element: &Element) -> Option<&'static str> {
    Some(element.kind().name())
}

/// Kind name for a raw wire tag, `None` if no shape uses it
pub fn type_of_tag(tag: &str) -> Option<&'static str> {
    ElementKind::from_tag(tag).map(ElementKind::name)
}

/// Build an element whose leading attributes are required parameters.
///
/// `extra` may not repeat a required name.
pub(crate) fn element_with<const N: usize>(
    kind: ElementKind,
    required: [(&'static str, AttrValue); N],
    extra: Attributes,
) -> Result<Element> {
    let mut attributes = Attributes::with_capacity(N + extra.len());
    for (name, value) in required {
        attributes.insert(name.to_string(), value);
    }
    for (name, value) in extra {
        if attributes.contains_key(&name) {
            return Err(GraphicsError::DuplicateAttribute {
                kind: kind.name(),
                name,
            });
        }
        attributes.insert(name, value);
    }
    Ok(Element::new(kind, attributes))
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape Constructors
// ─────────────────────────────────────────────────────────────────────────────

/// Circular or annular sector, as in a pie or donut chart, centered at (0, 0).
///
/// - `r1`: inner radius
/// - `r2`: outer radius
/// - `a1`: start angle, in degrees
/// - `a2`: end angle, in degrees
pub fn arc(r1: f64, r2: f64, a1: f64, a2: f64, attrs: Attributes) -> Result<Element> {
    element_with(
        ElementKind::Arc,
        [
            ("r1", r1.into()),
            ("r2", r2.into()),
            ("a1", a1.into()),
            ("a2", a2.into()),
        ],
        attrs,
    )
}

/// Circle; `cx`, `cy` and `r` go in `attrs`
pub fn circle(attrs: Attributes) -> Element {
    Element::new(ElementKind::Circle, attrs)
}

/// Ellipse; `cx`, `cy`, `rx` and `ry` go in `attrs`
pub fn ellipse(attrs: Attributes) -> Element {
    Element::new(ElementKind::Ellipse, attrs)
}

/// Image; the source goes in `href`
pub fn image(attrs: Attributes) -> Element {
    Element::new(ElementKind::Image, attrs)
}

/// Line segment from (`x1`, `y1`) to (`x2`, `y2`)
pub fn line(attrs: Attributes) -> Element {
    Element::new(ElementKind::Line, attrs)
}

/// A path element. See [`Path`](crate::Path) for building the `d` attribute.
pub fn path(attrs: Attributes) -> Element {
    Element::new(ElementKind::Path, attrs)
}

/// Closed polygon through the `points` attribute
pub fn polygon(attrs: Attributes) -> Element {
    Element::new(ElementKind::Polygon, attrs)
}

/// Open polyline through the `points` attribute
pub fn polyline(attrs: Attributes) -> Element {
    Element::new(ElementKind::Polyline, attrs)
}

/// Rectangle from `x`, `y`, `width`, `height`
pub fn rect(attrs: Attributes) -> Element {
    Element::new(ElementKind::Rect, attrs)
}

/// Text element showing `content`
pub fn text(content: &str, attrs: Attributes) -> Result<Element> {
    element_with(ElementKind::Text, [("text", content.into())], attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::{attrs, CoreError};

    #[test]
    fn test_tags_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.tag()), Some(kind));
            assert_eq!(type_of_tag(kind.tag()), Some(kind.name()));
        }
        assert_eq!(type_of_tag("pg"), Some("polygon"));
        assert_eq!(type_of_tag("zz"), None);
        assert_eq!(type_of_tag(""), None);
    }

    #[test]
    fn test_constructors_stamp_kind() {
        let cases = [
            (circle(attrs! {}), "circle"),
            (ellipse(attrs! {}), "ellipse"),
            (image(attrs! {}), "image"),
            (line(attrs! {}), "line"),
            (path(attrs! {}), "path"),
            (polygon(attrs! {}), "polygon"),
            (polyline(attrs! {}), "polyline"),
            (rect(attrs! {}), "rect"),
        ];
        for (element, name) in cases {
            assert_eq!(type_of(&element), Some(name));
        }
    }

    #[test]
    fn test_arc_required_params_lead() {
        let a = arc(10.0, 20.0, 0.0, 90.0, attrs! { "fill" => "red" }).unwrap();
        assert_eq!(a.kind(), ElementKind::Arc);
        let names: Vec<_> = a.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["r1", "r2", "a1", "a2", "fill"]);
        assert_eq!(
            a.to_json().unwrap(),
            r#"{"r1":10.0,"r2":20.0,"a1":0.0,"a2":90.0,"fill":"red","_t":"a"}"#
        );
    }

    #[test]
    fn test_arc_rejects_repeated_param() {
        let err = arc(1.0, 2.0, 0.0, 45.0, attrs! { "r2" => 5 }).unwrap_err();
        assert!(matches!(
            err,
            GraphicsError::DuplicateAttribute { kind: "arc", name } if name == "r2"
        ));
    }

    #[test]
    fn test_text() {
        let t = text("hello", attrs! { "x" => 4 }).unwrap();
        assert_eq!(t.get("text"), Some(&AttrValue::from("hello")));
        assert_eq!(type_of(&t), Some("text"));
        assert!(text("a", attrs! { "text" => "b" }).is_err());
    }

    #[test]
    fn test_reserved_tag_dropped() {
        let c = circle(attrs! { "_t" => "r", "r" => 1 });
        assert_eq!(c.attributes().len(), 1);
        assert_eq!(c.to_json().unwrap(), r#"{"r":1,"_t":"c"}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let original = rect(attrs! { "width" => 5, "height" => 2.5, "rx" => 1 });
        let decoded = Element::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_from_json_tag_errors() {
        assert!(matches!(
            Element::from_json(r#"{"r":1,"_t":"q"}"#),
            Err(GraphicsError::UnknownElementType(tag)) if tag == "q"
        ));
        assert!(matches!(
            Element::from_json(r#"{"r":1,"_t":3}"#),
            Err(GraphicsError::UnknownElementType(_))
        ));
        assert!(matches!(
            Element::from_json(r#"{"r":1}"#),
            Err(GraphicsError::MissingElementType)
        ));
        assert!(matches!(
            Element::from_json("[1]"),
            Err(GraphicsError::Core(CoreError::Json(_)))
        ));
    }

    #[test]
    fn test_from_json_requires_kind_attributes() {
        assert!(matches!(
            Element::from_json(r#"{"_t":"t"}"#),
            Err(GraphicsError::MissingAttribute { kind: "text", name: "text" })
        ));
        assert!(matches!(
            Element::from_json(r#"{"r1":1,"r2":2,"a1":0,"_t":"a"}"#),
            Err(GraphicsError::MissingAttribute { kind: "arc", name: "a2" })
        ));

        let full = arc(1.0, 2.0, 0.0, 90.0, attrs! { "fill" => "red" }).unwrap();
        let decoded = Element::from_json(&full.to_json().unwrap()).unwrap();
        assert_eq!(decoded, full);

        let t = text("hi", attrs! {}).unwrap();
        assert_eq!(Element::from_json(&t.to_json().unwrap()).unwrap(), t);
        assert!(Element::from_json(r#"{"_t":"c"}"#).is_ok());
    }

    #[test]
    fn test_required_attributes() {
        assert_eq!(ElementKind::Arc.required_attributes(), ["r1", "r2", "a1", "a2"]);
        assert_eq!(ElementKind::Text.required_attributes(), ["text"]);
        assert!(ElementKind::Rect.required_attributes().is_empty());
    }

    #[test]
    fn test_equal_but_independent() {
        let a = circle(attrs! { "r" => 5 });
        let b = circle(attrs! { "r" => 5 });
        assert_eq!(a, b);

        let mut taken = a.into_attributes();
        taken.insert("r".to_string(), AttrValue::Int(6));
        assert_eq!(b.get("r"), Some(&AttrValue::Int(5)));
    }
}
