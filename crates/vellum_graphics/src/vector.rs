//! 2D vector math

use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `degrees` from the +x axis
    pub fn from_angle_degrees(degrees: f64) -> Self {
        Self::UNIT_X.rotate(degrees.to_radians())
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, v: Vector2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    pub fn subtract(self, v: Vector2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn dot(self, v: Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate by `angle` radians.
    ///
    /// Positive angles turn +x toward +y, which is clockwise on a y-down
    /// surface such as SVG.
    pub fn rotate(self, angle: f64) -> Self {
        let perp = Self::new(-self.y, self.x);
        let (sin, cos) = angle.sin_cos();
        self.scale(cos).add(perp.scale(sin))
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self.negate()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        self.scale(k)
    }
}
