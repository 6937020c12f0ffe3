//! SVG path data builder
//!
//! [`Path`] accumulates path commands in call order and serializes them into
//! the SVG path-data mini-language on demand:
//!
//! ```rust
//! use vellum_graphics::Path;
//!
//! let d = Path::new()
//!     .move_to(10.0, 10.0)
//!     .horizontal_by(80.0)
//!     .arc_by(5.0, 5.0, 0.0, false, true, 5.0, 5.0)
//!     .vertical_to(90.0)
//!     .close()
//!     .serialize();
//!
//! assert_eq!(d, "M 10.0 10.0 h 80.0 a 5.0 5.0 0.0 0 1 5.0 5.0 V 90.0 Z");
//! ```
//!
//! The builder checks nothing about the geometry it records. A `close`
//! with no preceding `move_to` is written out as-is.

use vellum_core::{Attributes, PathConfig};

use crate::element::{element_with, Element, ElementKind};
use crate::error::Result;
use crate::vector::Vector2;

/// 2^53: beyond this every f64 is an integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Number formatting for path operands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFormat {
    /// Decimal digits kept after rounding
    pub precision: u32,
}

impl Default for PathFormat {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl From<&PathConfig> for PathFormat {
    fn from(config: &PathConfig) -> Self {
        Self {
            precision: config.precision,
        }
    }
}

impl PathFormat {
    /// Format one operand.
    ///
    /// Rounds half away from zero to `precision` digits, then prints the
    /// shortest representation, always with a fractional part. Negative
    /// zero prints as `0.0`. Values whose scaled form reaches 2^53 have no
    /// spare digits to round and are printed unrounded.
    pub fn number(&self, value: f64) -> String {
        let scale = 10f64.powi(self.precision as i32);
        let scaled = value * scale;
        let mut rounded = if scaled.is_finite() && scaled.abs() < MAX_EXACT_INTEGER {
            scaled.round() / scale
        } else {
            value
        };
        if rounded == 0.0 {
            rounded = 0.0;
        }
        if rounded.is_finite() && rounded.fract() == 0.0 {
            format!("{rounded:.1}")
        } else {
            format!("{rounded}")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Commands
// ─────────────────────────────────────────────────────────────────────────────

/// One path-data command.
///
/// `relative` selects the lowercase form, whose coordinates are offsets from
/// the current point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath (M/m)
    MoveTo { relative: bool, to: Vector2 },
    /// Straight line (L/l)
    LineTo { relative: bool, to: Vector2 },
    /// Horizontal line (H/h)
    HorizontalTo { relative: bool, x: f64 },
    /// Vertical line (V/v)
    VerticalTo { relative: bool, y: f64 },
    /// Cubic Bézier curve (C/c)
    CubicTo {
        relative: bool,
        control1: Vector2,
        control2: Vector2,
        end: Vector2,
    },
    /// Cubic Bézier reflecting the previous control point (S/s)
    SmoothCubicTo {
        relative: bool,
        control2: Vector2,
        end: Vector2,
    },
    /// Quadratic Bézier curve (Q/q)
    QuadTo {
        relative: bool,
        control: Vector2,
        end: Vector2,
    },
    /// Quadratic Bézier reflecting the previous control point (T/t)
    SmoothQuadTo { relative: bool, end: Vector2 },
    /// Elliptical arc (A/a)
    ArcTo {
        relative: bool,
        radii: Vector2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Vector2,
    },
    /// Close the current subpath (Z/z)
    Close { relative: bool },
}

/// A serialized operand: a number, or one of the arc's 0/1 flags
enum Operand {
    Number(f64),
    Flag(bool),
}

impl PathCommand {
    /// Command letter, lowercase for relative commands
    pub fn code(&self) -> char {
        let code = match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::HorizontalTo { .. } => 'H',
            PathCommand::VerticalTo { .. } => 'V',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::SmoothCubicTo { .. } => 'S',
            PathCommand::QuadTo { .. } => 'Q',
            PathCommand::SmoothQuadTo { .. } => 'T',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::Close { .. } => 'Z',
        };
        if self.is_relative() {
            code.to_ascii_lowercase()
        } else {
            code
        }
    }

    pub fn is_relative(&self) -> bool {
        match *self {
            PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalTo { relative, .. }
            | PathCommand::VerticalTo { relative, .. }
            | PathCommand::CubicTo { relative, .. }
            | PathCommand::SmoothCubicTo { relative, .. }
            | PathCommand::QuadTo { relative, .. }
            | PathCommand::SmoothQuadTo { relative, .. }
            | PathCommand::ArcTo { relative, .. }
            | PathCommand::Close { relative } => relative,
        }
    }

    fn operands(&self) -> Vec<Operand> {
        use Operand::{Flag, Number};

        match *self {
            PathCommand::MoveTo { to, .. } | PathCommand::LineTo { to, .. } => {
                vec![Number(to.x), Number(to.y)]
            }
            PathCommand::HorizontalTo { x, .. } => vec![Number(x)],
            PathCommand::VerticalTo { y, .. } => vec![Number(y)],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
                ..
            } => vec![
                Number(control1.x),
                Number(control1.y),
                Number(control2.x),
                Number(control2.y),
                Number(end.x),
                Number(end.y),
            ],
            PathCommand::SmoothCubicTo { control2, end, .. } => vec![
                Number(control2.x),
                Number(control2.y),
                Number(end.x),
                Number(end.y),
            ],
            PathCommand::QuadTo { control, end, .. } => vec![
                Number(control.x),
                Number(control.y),
                Number(end.x),
                Number(end.y),
            ],
            PathCommand::SmoothQuadTo { end, .. } => vec![Number(end.x), Number(end.y)],
            PathCommand::ArcTo {
                radii,
                rotation,
                large_arc,
                sweep,
                end,
                ..
            } => vec![
                Number(radii.x),
                Number(radii.y),
                Number(rotation),
                Flag(large_arc),
                Flag(sweep),
                Number(end.x),
                Number(end.y),
            ],
            PathCommand::Close { .. } => Vec::new(),
        }
    }

    fn write(&self, out: &mut String, format: &PathFormat) {
        out.push(self.code());
        for operand in self.operands() {
            out.push(' ');
            match operand {
                Operand::Number(v) => out.push_str(&format.number(v)),
                Operand::Flag(flag) => out.push(if flag { '1' } else { '0' }),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Builder
// ─────────────────────────────────────────────────────────────────────────────

/// An append-only sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Start a new subpath at (x, y)
    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::MoveTo {
            relative: false,
            to: Vector2::new(x, y),
        })
    }

    /// Start a new subpath offset by (dx, dy)
    pub fn move_by(self, dx: f64, dy: f64) -> Self {
        self.push(PathCommand::MoveTo {
            relative: true,
            to: Vector2::new(dx, dy),
        })
    }

    /// Line to (x, y)
    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::LineTo {
            relative: false,
            to: Vector2::new(x, y),
        })
    }

    /// Line by (dx, dy)
    pub fn line_by(self, dx: f64, dy: f64) -> Self {
        self.push(PathCommand::LineTo {
            relative: true,
            to: Vector2::new(dx, dy),
        })
    }

    /// Horizontal line to x
    pub fn horizontal_to(self, x: f64) -> Self {
        self.push(PathCommand::HorizontalTo { relative: false, x })
    }

    /// Horizontal line by dx
    pub fn horizontal_by(self, dx: f64) -> Self {
        self.push(PathCommand::HorizontalTo {
            relative: true,
            x: dx,
        })
    }

    /// Vertical line to y
    pub fn vertical_to(self, y: f64) -> Self {
        self.push(PathCommand::VerticalTo { relative: false, y })
    }

    /// Vertical line by dy
    pub fn vertical_by(self, dy: f64) -> Self {
        self.push(PathCommand::VerticalTo {
            relative: true,
            y: dy,
        })
    }

    /// Cubic Bézier curve to (x, y) with control points (x1, y1) and (x2, y2)
    pub fn cubic_to(self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::CubicTo {
            relative: false,
            control1: Vector2::new(x1, y1),
            control2: Vector2::new(x2, y2),
            end: Vector2::new(x, y),
        })
    }

    /// Cubic Bézier curve, all points relative to the current point
    pub fn cubic_by(self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::CubicTo {
            relative: true,
            control1: Vector2::new(x1, y1),
            control2: Vector2::new(x2, y2),
            end: Vector2::new(x, y),
        })
    }

    /// Smooth cubic Bézier to (x, y); the first control point mirrors the
    /// previous command's second one
    pub fn smooth_cubic_to(self, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::SmoothCubicTo {
            relative: false,
            control2: Vector2::new(x2, y2),
            end: Vector2::new(x, y),
        })
    }

    /// Smooth cubic Bézier, relative
    pub fn smooth_cubic_by(self, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::SmoothCubicTo {
            relative: true,
            control2: Vector2::new(x2, y2),
            end: Vector2::new(x, y),
        })
    }

    /// Quadratic Bézier curve to (x, y) with control point (x1, y1)
    pub fn quad_to(self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::QuadTo {
            relative: false,
            control: Vector2::new(x1, y1),
            end: Vector2::new(x, y),
        })
    }

    /// Quadratic Bézier curve, relative
    pub fn quad_by(self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::QuadTo {
            relative: true,
            control: Vector2::new(x1, y1),
            end: Vector2::new(x, y),
        })
    }

    /// Smooth quadratic Bézier to (x, y); the control point mirrors the
    /// previous command's
    pub fn smooth_quad_to(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::SmoothQuadTo {
            relative: false,
            end: Vector2::new(x, y),
        })
    }

    /// Smooth quadratic Bézier, relative
    pub fn smooth_quad_by(self, x: f64, y: f64) -> Self {
        self.push(PathCommand::SmoothQuadTo {
            relative: true,
            end: Vector2::new(x, y),
        })
    }

    /// SVG elliptical arc to (x, y)
    ///
    /// - `rx`, `ry`: radii of the ellipse
    /// - `rotation`: rotation of the ellipse's x axis, in degrees
    /// - `large_arc`: If true, take the arc spanning more than 180 degrees
    /// - `sweep`: If true, move through positive angles
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.push(PathCommand::ArcTo {
            relative: false,
            radii: Vector2::new(rx, ry),
            rotation,
            large_arc,
            sweep,
            end: Vector2::new(x, y),
        })
    }

    /// SVG elliptical arc, end point relative to the current point
    #[allow(clippy::too_many_arguments)]
    pub fn arc_by(
        self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.push(PathCommand::ArcTo {
            relative: true,
            radii: Vector2::new(rx, ry),
            rotation,
            large_arc,
            sweep,
            end: Vector2::new(x, y),
        })
    }

    /// Close the current subpath (Z)
    pub fn close(self) -> Self {
        self.push(PathCommand::Close { relative: false })
    }

    /// Close the current subpath (z). Renders the same as [`close`](Self::close).
    pub fn close_relative(self) -> Self {
        self.push(PathCommand::Close { relative: true })
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize into SVG path data, operands rounded to 2 decimals
    pub fn serialize(&self) -> String {
        self.serialize_with(&PathFormat::default())
    }

    /// Serialize into SVG path data with an explicit number format
    pub fn serialize_with(&self, format: &PathFormat) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            command.write(&mut out, format);
        }
        out
    }

    /// Shorthand for [`serialize`](Self::serialize): the `d` attribute value
    pub fn d(&self) -> String {
        self.serialize()
    }

    /// A `path` element drawing this path, with extra attributes.
    ///
    /// Fails if `extra` already sets `d`.
    pub fn to_element(&self, extra: Attributes) -> Result<Element> {
        element_with(ElementKind::Path, [("d", self.serialize().into())], extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphicsError;
    use vellum_core::{attrs, AttrValue};

    #[test]
    fn test_move_line_rounding() {
        let d = Path::new().move_to(1.0, 2.0).line_to(3.456, 4.0).serialize();
        assert_eq!(d, "M 1.0 2.0 L 3.46 4.0");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let path = Path::new().move_to(0.0, 0.0).quad_to(1.0, 2.0, 3.0, 4.0);
        let first = path.serialize();
        assert_eq!(path.serialize(), first);
        assert_eq!(path.d(), first);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_every_command_code() {
        let d = Path::new()
            .move_to(1.0, 1.0)
            .move_by(1.0, 1.0)
            .line_to(2.0, 2.0)
            .line_by(2.0, 2.0)
            .horizontal_to(3.0)
            .horizontal_by(3.0)
            .vertical_to(4.0)
            .vertical_by(4.0)
            .cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
            .cubic_by(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
            .smooth_cubic_to(1.0, 2.0, 3.0, 4.0)
            .smooth_cubic_by(1.0, 2.0, 3.0, 4.0)
            .quad_to(1.0, 2.0, 3.0, 4.0)
            .quad_by(1.0, 2.0, 3.0, 4.0)
            .smooth_quad_to(1.0, 2.0)
            .smooth_quad_by(1.0, 2.0)
            .arc_to(1.0, 2.0, 30.0, true, false, 3.0, 4.0)
            .arc_by(1.0, 2.0, 30.0, false, true, 3.0, 4.0)
            .close()
            .close_relative()
            .serialize();

        assert_eq!(
            d,
            "M 1.0 1.0 m 1.0 1.0 L 2.0 2.0 l 2.0 2.0 H 3.0 h 3.0 V 4.0 v 4.0 \
             C 1.0 2.0 3.0 4.0 5.0 6.0 c 1.0 2.0 3.0 4.0 5.0 6.0 \
             S 1.0 2.0 3.0 4.0 s 1.0 2.0 3.0 4.0 \
             Q 1.0 2.0 3.0 4.0 q 1.0 2.0 3.0 4.0 T 1.0 2.0 t 1.0 2.0 \
             A 1.0 2.0 30.0 1 0 3.0 4.0 a 1.0 2.0 30.0 0 1 3.0 4.0 Z z"
        );
    }

    #[test]
    fn test_number_format() {
        let f = PathFormat::default();
        assert_eq!(f.number(10.0), "10.0");
        assert_eq!(f.number(0.125), "0.13");
        assert_eq!(f.number(-2.5), "-2.5");
        assert_eq!(f.number(1.999), "2.0");
        assert_eq!(f.number(-0.001), "0.0");
        assert_eq!(f.number(1234.5678), "1234.57");
    }

    #[test]
    fn test_number_format_large_operands() {
        let f = PathFormat::default();
        for value in [1e307, -1e307, f64::MAX, 1e16] {
            let text = f.number(value);
            assert!(text.ends_with(".0"), "{value} -> {text}");
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
        assert_eq!(
            Path::new().move_to(1e307, 0.0).serialize(),
            format!("M {:.1} 0.0", 1e307)
        );
        assert_eq!(f.number(1_234_567_890.126), "1234567890.13");
    }

    #[test]
    fn test_configured_precision() {
        let format = PathFormat::from(&PathConfig { precision: 0 });
        let path = Path::new().move_to(1.4, 2.6);
        assert_eq!(path.serialize_with(&format), "M 1.0 3.0");

        let format = PathFormat { precision: 3 };
        assert_eq!(
            Path::new().line_to(3.14159, 0.0).serialize_with(&format),
            "L 3.142 0.0"
        );
    }

    #[test]
    fn test_no_geometry_validation() {
        assert_eq!(Path::new().close().line_by(1.0, 1.0).serialize(), "Z l 1.0 1.0");
        assert_eq!(Path::new().serialize(), "");
        assert!(Path::new().is_empty());
    }

    #[test]
    fn test_relative_flag() {
        let path = Path::new().move_to(0.0, 0.0).line_by(1.0, 0.0);
        let codes: Vec<_> = path.commands().iter().map(PathCommand::code).collect();
        assert_eq!(codes, ['M', 'l']);
        assert!(!path.commands()[0].is_relative());
        assert!(path.commands()[1].is_relative());
        assert_eq!(Path::from_commands(path.commands().to_vec()), path);
    }

    #[test]
    fn test_to_element() {
        let el = Path::new()
            .move_to(0.0, 0.0)
            .line_to(5.0, 5.0)
            .to_element(attrs! { "stroke" => "red" })
            .unwrap();
        assert_eq!(el.kind(), ElementKind::Path);
        assert_eq!(el.get("d"), Some(&AttrValue::from("M 0.0 0.0 L 5.0 5.0")));
        assert_eq!(el.get("stroke"), Some(&AttrValue::from("red")));
    }

    #[test]
    fn test_to_element_rejects_d() {
        let err = Path::new()
            .to_element(attrs! { "d" => "M 0 0" })
            .unwrap_err();
        assert!(matches!(err, GraphicsError::DuplicateAttribute { name, .. } if name == "d"));
    }
}
