//! 2D affine geometry kernel: Vector, Point, and homogeneous 3x3 Matrix.
//!
//! All values are f64 and all angles are radians. Degenerate input (zero
//! length, singular matrices) propagates as NaN/Inf through the plain
//! operations; the `checked_*` forms and `Mat3::inverse` report a
//! [`MathError`] instead.

pub use glam::{DMat3, DVec2};

pub mod error;
pub mod interop;
pub mod located;
pub mod matrix;
pub mod point;
pub mod vector;

pub use error::{MathError, MathResult};
pub use located::Located;
pub use matrix::{Column3, Mat3, Matrix};
pub use point::Point;
pub use vector::Vector;
