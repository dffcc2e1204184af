use core::fmt;
use core::ops;

use crate::located::Located;
use crate::matrix::Mat3;
use crate::vector::Vector;

/// A position in the plane.
///
/// Structurally the same as [`Vector`] but semantically a location; convert
/// explicitly with [`Located::to_vector`] and [`Point::from_vector`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_vector(v: Vector) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Non-mutating [`Located::transform`].
    #[inline]
    pub fn transformed(self, matrix: &Mat3) -> Point {
        let mut p = self;
        p.transform(matrix);
        p
    }
}

impl Located for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_vector(), f)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    /// `a - b` is the vector from `b` to `a`.
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        rhs.vector_to(&self)
    }
}

impl ops::AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.translate_by_vector(rhs);
    }
}
