//! Stages, scenes, and redraws
//!
//! Elements reach the rendering surface in one of two ways:
//!
//! - A **stage** is a packed, ordered list of elements. It is rendered once,
//!   behind everything else, and never updated.
//! - A **scene** is a [`DataTable`] with one row per named element. Column
//!   `d` holds the element as first rendered; column `o` holds an override
//!   that replaces its attributes on the next redraw, or the empty string
//!   when there is none.
//!
//! [`draw`] and [`reset`] rewrite the override column of a single row. They
//! are local edits: nothing reaches the renderer until the caller transmits
//! the table (or the changes drained from it) again.
//!
//! ```rust
//! use vellum_core::attrs;
//! use vellum_graphics::element::{circle, rect};
//! use vellum_graphics::scene::{draw, reset, scene};
//!
//! let mut s = scene([
//!     ("sun", circle(attrs! { "r" => 20, "fill" => "yellow" })),
//!     ("sky", rect(attrs! { "width" => 100, "height" => 60 })),
//! ])
//! .unwrap();
//!
//! let sun = s.row_ref("sun").unwrap();
//! draw(&mut s, &sun, &attrs! { "fill" => "orange" }).unwrap();
//! assert_eq!(s.get(&sun, "o").unwrap(), r#"{"fill":"orange"}"#);
//!
//! reset(&mut s, &sun).unwrap();
//! assert_eq!(s.get(&sun, "o").unwrap(), "");
//! ```

use vellum_core::{pack, to_json, Attributes, CoreError, DataTable, Packed, RowRef};

use crate::element::Element;
use crate::error::{GraphicsError, Result};

/// Field names of a scene table
pub const SCENE_FIELDS: &str = "d o";
/// Column holding an element's original attributes
pub const BASE_FIELD: &str = "d";
/// Column holding an element's current override
pub const OVERRIDE_FIELD: &str = "o";

/// Pack elements for one-shot background rendering.
pub fn stage<I>(elements: I) -> Result<Packed>
where
    I: IntoIterator<Item = Element>,
{
    let elements: Vec<Element> = elements.into_iter().collect();
    let packed = pack(&elements)?;
    tracing::debug!(elements = elements.len(), "stage packed");
    Ok(packed)
}

/// Build a scene table from named elements, keeping their order.
///
/// Every key must be unique. Overrides start out empty.
pub fn scene<I, K>(elements: I) -> Result<DataTable>
where
    I: IntoIterator<Item = (K, Element)>,
    K: Into<String>,
{
    let rows = elements
        .into_iter()
        .map(|(key, element)| Ok((key.into(), vec![element.to_json()?, String::new()])))
        .collect::<Result<Vec<(String, Vec<String>)>>>()?;

    let table = DataTable::new(SCENE_FIELDS, rows).map_err(|err| match err {
        CoreError::DuplicateRow(key) => GraphicsError::DuplicateKey(key),
        other => other.into(),
    })?;
    tracing::debug!(elements = table.len(), "scene built");
    Ok(table)
}

/// Schedule a redraw of `element` with `attrs` replacing its attributes.
///
/// Returns the reference unchanged.
pub fn draw<'r>(
    scene: &mut DataTable,
    element: &'r RowRef,
    attrs: &Attributes,
) -> Result<&'r RowRef> {
    scene.set(element, OVERRIDE_FIELD, to_json(attrs)?)?;
    tracing::debug!(key = element.key(), "element redraw scheduled");
    Ok(element)
}

/// Schedule a redraw of `element` with its original attributes, clearing
/// any earlier [`draw`].
pub fn reset<'r>(scene: &mut DataTable, element: &'r RowRef) -> Result<&'r RowRef> {
    scene.set(element, OVERRIDE_FIELD, "")?;
    tracing::debug!(key = element.key(), "element reset scheduled");
    Ok(element)
}

/// The element as it was placed in the scene
pub fn base_element(scene: &DataTable, element: &RowRef) -> Result<Element> {
    Element::from_json(scene.get(element, BASE_FIELD)?)
}

/// The override currently set on `element`, if any
pub fn override_of(scene: &DataTable, element: &RowRef) -> Result<Option<Attributes>> {
    let json = scene.get(element, OVERRIDE_FIELD)?;
    if json.is_empty() {
        return Ok(None);
    }
    Ok(Some(vellum_core::from_json(json)?))
}
