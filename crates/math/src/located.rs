//! Shared behaviour for anything that sits at a position in the plane.

use crate::matrix::{Column3, Mat3};
use crate::vector::Vector;

/// A located geometric value.
///
/// Implementors supply coordinate access and get measuring, translating and
/// transforming for free. Provided methods can be overridden; the rest keep
/// working against the override.
pub trait Located {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn set_xy(&mut self, x: f64, y: f64);

    /// Angle of the vector from `self` to `other`.
    fn angle_to<L: Located + ?Sized>(&self, other: &L) -> f64 {
        (other.y() - self.y()).atan2(other.x() - self.x())
    }

    fn distance_to<L: Located + ?Sized>(&self, other: &L) -> f64 {
        self.vector_to(other).length()
    }

    /// `other - self`, as a new vector.
    fn vector_to<L: Located + ?Sized>(&self, other: &L) -> Vector {
        Vector::new(other.x() - self.x(), other.y() - self.y())
    }

    /// Displacement from the origin.
    fn to_vector(&self) -> Vector {
        Vector::new(self.x(), self.y())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.set_xy(self.x() + dx, self.y() + dy);
        self
    }

    fn translate_by_vector(&mut self, v: Vector) -> &mut Self {
        self.translate(v.x, v.y)
    }

    /// Replaces the position with `matrix * (x, y, 1)`.
    fn transform(&mut self, matrix: &Mat3) -> &mut Self {
        let out = matrix.multiply(&self.to_matrix());
        self.set_xy(out.values[0][0], out.values[1][0]);
        self
    }

    /// Homogeneous column `[[x], [y], [1]]`.
    fn to_matrix(&self) -> Column3 {
        Column3::new([[self.x()], [self.y()], [1.0]])
    }
}
