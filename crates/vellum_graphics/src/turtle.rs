//! Logo-style turtle for authoring paths by motion
//!
//! A [`Turtle`] carries a position, a heading and a pen. Every change of
//! position is recorded in its [`Path`]: as a line while the pen is down, as
//! a move while it is up. Turning only changes the heading.
//!
//! Angles are in degrees. Headings rotate the way SVG's y-down coordinate
//! system does, so `turn_right(90.0)` from heading 0° points down the screen.
//!
//! ```rust
//! use vellum_graphics::Turtle;
//!
//! let mut t = Turtle::new(10.0, 10.0, 0.0);
//! t.pen_down();
//! for _ in 0..4 {
//!     t.forward(20.0).turn_right(90.0);
//! }
//! t.pen_up(true);
//!
//! assert_eq!(
//!     t.serialize(),
//!     "M 10.0 10.0 L 30.0 10.0 L 30.0 30.0 L 10.0 30.0 L 10.0 10.0 Z"
//! );
//! ```

use vellum_core::Attributes;

use crate::element::Element;
use crate::error::Result;
use crate::path::Path;
use crate::vector::Vector2;

/// A stateful drawing cursor
#[derive(Clone, Debug)]
pub struct Turtle {
    position: Vector2,
    /// Direction of travel, kept as a vector so turns compose without
    /// going back through angles
    heading: Vector2,
    pen_down: bool,
    path: Path,
}

impl Turtle {
    /// Create a turtle at (x, y) facing `degrees`, pen up.
    ///
    /// The starting position is recorded as the path's first move.
    pub fn new(x: f64, y: f64, degrees: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            heading: Vector2::from_angle_degrees(degrees),
            pen_down: false,
            path: Path::new().move_to(x, y),
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn heading(&self) -> Vector2 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// The path recorded so far
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move forward by `distance`
    pub fn forward(&mut self, distance: f64) -> &mut Self {
        self.advance(distance)
    }

    /// Move backward by `distance`
    pub fn backward(&mut self, distance: f64) -> &mut Self {
        self.advance(-distance)
    }

    /// Turn counter-clockwise (on screen) by `degrees`
    pub fn turn_left(&mut self, degrees: f64) -> &mut Self {
        self.turn(-degrees)
    }

    /// Turn clockwise (on screen) by `degrees`
    pub fn turn_right(&mut self, degrees: f64) -> &mut Self {
        self.turn(degrees)
    }

    /// Lift the pen. If `close` is set, close the current subpath first.
    pub fn pen_up(&mut self, close: bool) -> &mut Self {
        if close {
            self.record(Path::close);
        }
        self.pen_down = false;
        self
    }

    pub fn pen_down(&mut self) -> &mut Self {
        self.pen_down = true;
        self
    }

    /// Jump to (x, y). Drawn as a line if the pen is down.
    pub fn set_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = Vector2::new(x, y);
        self.emit_position()
    }

    /// Face `degrees`, measured from the +x axis
    pub fn set_heading(&mut self, degrees: f64) -> &mut Self {
        self.heading = Vector2::from_angle_degrees(degrees);
        self
    }

    /// Serialize the recorded motion into SVG path data
    pub fn serialize(&self) -> String {
        self.path.serialize()
    }

    /// Shorthand for [`serialize`](Self::serialize)
    pub fn d(&self) -> String {
        self.serialize()
    }

    /// A `path` element drawing the recorded motion, with extra attributes
    pub fn to_element(&self, extra: Attributes) -> Result<Element> {
        self.path.to_element(extra)
    }

    fn advance(&mut self, distance: f64) -> &mut Self {
        self.position = self.position.add(self.heading.scale(distance));
        self.emit_position()
    }

    fn turn(&mut self, degrees: f64) -> &mut Self {
        self.heading = self.heading.rotate(degrees.to_radians());
        self
    }

    fn emit_position(&mut self) -> &mut Self {
        let Vector2 { x, y } = self.position;
        if self.pen_down {
            self.record(|path| path.line_to(x, y));
        } else {
            self.record(|path| path.move_to(x, y));
        }
        self
    }

    fn record(&mut self, step: impl FnOnce(Path) -> Path) {
        self.path = step(std::mem::take(&mut self.path));
    }
}

impl Default for Turtle {
    /// A turtle at the origin facing +x
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use vellum_core::{attrs, AttrValue};

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Vector2, b: Vector2) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_initial_state() {
        let t = Turtle::new(3.0, 4.0, 90.0);
        assert_eq!(t.position(), Vector2::new(3.0, 4.0));
        assert_close(t.heading(), Vector2::new(0.0, 1.0));
        assert!(!t.is_pen_down());
        assert_eq!(t.serialize(), "M 3.0 4.0");
    }

    #[test]
    fn test_matches_path_builder() {
        let mut t = Turtle::default();
        t.pen_down();
        t.forward(10.0);
        let expected = Path::new().move_to(0.0, 0.0).line_to(10.0, 0.0);
        assert_eq!(t.serialize(), expected.serialize());
    }

    #[test]
    fn test_pen_up_moves() {
        let mut t = Turtle::default();
        t.forward(5.0).pen_down().forward(5.0).pen_up(false).backward(20.0);
        assert_eq!(t.serialize(), "M 0.0 0.0 M 5.0 0.0 L 10.0 0.0 M -10.0 0.0");
    }

    #[test]
    fn test_one_command_per_position_change() {
        let mut t = Turtle::default();
        t.forward(1.0)
            .turn_left(30.0)
            .pen_down()
            .forward(2.0)
            .set_heading(45.0)
            .set_position(7.0, 7.0)
            .backward(1.0);
        // initial move + four position changes
        assert_eq!(t.path().len(), 5);
    }

    #[test]
    fn test_turn_sign_convention() {
        for degrees in [0.0, 15.0, 90.0, -135.0, 400.0] {
            let mut left = Turtle::new(0.0, 0.0, 20.0);
            let mut right = left.clone();
            left.turn_left(degrees);
            right.turn_right(-degrees);
            assert_close(left.heading(), right.heading());
        }
    }

    #[test]
    fn test_turn_right_points_down_screen() {
        let mut t = Turtle::default();
        t.turn_right(90.0).pen_down().forward(10.0);
        assert_eq!(t.serialize(), "M 0.0 0.0 L 0.0 10.0");
    }

    #[test]
    fn test_pen_up_close() {
        let mut t = Turtle::default();
        t.pen_down().forward(10.0).turn_left(120.0).forward(10.0);
        t.pen_up(true);
        assert!(!t.is_pen_down());
        assert_eq!(
            t.path().commands().last(),
            Some(&PathCommand::Close { relative: false })
        );

        let before = t.path().len();
        t.pen_up(false);
        assert_eq!(t.path().len(), before);
    }

    #[test]
    fn test_set_position_respects_pen() {
        let mut t = Turtle::default();
        t.set_position(5.0, 5.0).pen_down().set_position(1.0, 2.0);
        assert_eq!(t.serialize(), "M 0.0 0.0 M 5.0 5.0 L 1.0 2.0");
        assert_eq!(t.position(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_set_heading_is_absolute() {
        let mut t = Turtle::default();
        t.turn_left(73.0).set_heading(180.0);
        assert_close(t.heading(), Vector2::new(-1.0, 0.0));
        assert_eq!(t.path().len(), 1);
    }

    #[test]
    fn test_serialize_does_not_consume() {
        let mut t = Turtle::default();
        t.pen_down().forward(3.0);
        assert_eq!(t.serialize(), t.d());
        t.forward(3.0);
        assert_eq!(t.serialize(), "M 0.0 0.0 L 3.0 0.0 L 6.0 0.0");
    }

    #[test]
    fn test_to_element() {
        let mut t = Turtle::default();
        t.pen_down().forward(1.0);
        let el = t.to_element(attrs! { "fill" => "none" }).unwrap();
        assert_eq!(el.get("d"), Some(&AttrValue::from("M 0.0 0.0 L 1.0 0.0")));
        assert_eq!(el.get("fill"), Some(&AttrValue::from("none")));
    }
}
