//! Vellum Graphics
//!
//! Declarative 2D vector graphics for a remote rendering surface. Nothing is
//! rasterized here; every API produces data for the renderer to interpret:
//!
//! - **Vector math**: `Vector2` with rotation
//! - **Paths**: `Path` builds SVG path data command by command
//! - **Turtle**: `Turtle` builds paths from relative motion
//! - **Elements**: tagged shape records (`arc`, `circle`, `text`, ...)
//! - **Stage and scene**: static packed backgrounds, and keyed scene tables
//!   whose elements can later be redrawn with `draw` or restored with `reset`
//!
//! # Example
//!
//! ```rust
//! use vellum_core::attrs;
//! use vellum_graphics::element::rect;
//! use vellum_graphics::scene::{draw, scene};
//! use vellum_graphics::Turtle;
//!
//! let mut t = Turtle::new(50.0, 50.0, -90.0);
//! t.pen_down();
//! for _ in 0..3 {
//!     t.forward(30.0).turn_right(120.0);
//! }
//! t.pen_up(true);
//!
//! let triangle = t.to_element(attrs! { "fill" => "green" }).unwrap();
//! let mut s = scene([
//!     ("frame", rect(attrs! { "width" => 100, "height" => 100 })),
//!     ("triangle", triangle),
//! ])
//! .unwrap();
//!
//! let triangle = s.row_ref("triangle").unwrap();
//! draw(&mut s, &triangle, &attrs! { "fill" => "red" }).unwrap();
//! assert_eq!(s.take_changes().len(), 1);
//! ```

pub mod element;
pub mod error;
pub mod path;
pub mod scene;
pub mod turtle;
pub mod vector;

pub use element::{type_of, type_of_tag, Element, ElementKind};
pub use error::{GraphicsError, Result};
pub use path::{Path, PathCommand, PathFormat};
pub use scene::{draw, reset, scene, stage};
pub use turtle::Turtle;
pub use vector::Vector2;
