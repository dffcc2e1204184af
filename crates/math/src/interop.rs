//! Conversions to and from glam's f64 types.
//!
//! glam stores matrices column-major; ours are row-major, so matrix
//! conversions transpose.

use glam::{DMat3, DVec2};

use crate::matrix::Mat3;
use crate::point::Point;
use crate::vector::Vector;

impl From<Vector> for DVec2 {
    #[inline]
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector {
    #[inline]
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Mat3> for DMat3 {
    #[inline]
    fn from(m: Mat3) -> Self {
        DMat3::from_cols_array_2d(&m.transpose().values)
    }
}

impl From<DMat3> for Mat3 {
    #[inline]
    fn from(m: DMat3) -> Self {
        Mat3::new(m.to_cols_array_2d()).transpose()
    }
}
