//! Vellum Core
//!
//! The data substrate shared by every Vellum crate. Nothing in here knows
//! about shapes or paths; it only knows how to hold values and ship them to a
//! remote rendering surface:
//!
//! - **Attribute values**: A closed set of scalars (`AttrValue`) and the
//!   ordered `Attributes` map built from them
//! - **Packing**: `pack` turns any serializable value into the `data:` wire form
//! - **Data tables**: `DataTable` rows keyed by string, addressed through
//!   lookup-only `RowRef` handles, with a journal of field writes
//! - **Configuration**: `VellumConfig`, loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use vellum_core::{attrs, DataTable};
//!
//! let mut table = DataTable::new(
//!     "d o",
//!     [("dot", vec![r#"{"r":5}"#.to_string(), String::new()])],
//! )
//! .unwrap();
//!
//! let dot = table.row_ref("dot").unwrap();
//! table.set(&dot, "o", r#"{"r":10}"#).unwrap();
//!
//! assert_eq!(table.get(&dot, "o").unwrap(), r#"{"r":10}"#);
//! assert_eq!(table.take_changes().len(), 1);
//!
//! let style = attrs! { "fill" => "red", "opacity" => 0.5 };
//! assert_eq!(style.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod pack;
pub mod table;
pub mod value;

pub use config::{PathConfig, VellumConfig};
pub use error::{CoreError, Result};
pub use pack::{from_json, pack, to_json, unpack, Packed, PACKED_PREFIX};
pub use table::{DataTable, RowChange, RowRef};
pub use value::{AttrValue, Attributes};
