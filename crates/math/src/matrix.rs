//! Fixed-shape row-major matrices for 2D homogeneous transforms.
//!
//! [`Mat3`] is the transform type; [`Column3`] is a homogeneous point
//! `(x, y, 1)`. Shapes are const parameters, so multiplying incompatible
//! shapes does not compile.
//!
//! Composition follows the column-vector convention: `a * b` applies `b`
//! first, then `a`.

use core::ops;

use crate::error::{MathError, MathResult};
use crate::located::Located;
use crate::point::Point;
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    pub values: [[f64; C]; R],
}

pub type Mat3 = Matrix<3, 3>;
pub type Column3 = Matrix<3, 1>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    #[inline]
    pub const fn new(values: [[f64; C]; R]) -> Self {
        Self { values }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self {
            values: [[0.0; C]; R],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    #[inline]
    pub fn rows(&self) -> &[[f64; C]; R] {
        &self.values
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut out = Matrix::<C, R>::zeros();
        for (i, row) in self.values.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                out.values[j][i] = *v;
            }
        }
        out
    }

    /// Standard product `self * rhs` (row . column).
    pub fn multiply<const K: usize>(&self, rhs: &Matrix<C, K>) -> Matrix<R, K> {
        let mut out = Matrix::<R, K>::zeros();
        for i in 0..R {
            for j in 0..K {
                let mut acc = 0.0;
                for k in 0..C {
                    acc += self.values[i][k] * rhs.values[k][j];
                }
                out.values[i][j] = acc;
            }
        }
        out
    }
}

impl<const R: usize, const C: usize, const K: usize> ops::Mul<Matrix<C, K>> for Matrix<R, C> {
    type Output = Matrix<R, K>;

    #[inline]
    fn mul(self, rhs: Matrix<C, K>) -> Matrix<R, K> {
        self.multiply(&rhs)
    }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    #[inline]
    pub const fn scale(factor: f64) -> Self {
        Self::scale_xy(factor, factor)
    }

    #[inline]
    pub const fn scale_xy(sx: f64, sy: f64) -> Self {
        Self::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    #[inline]
    pub const fn translation(v: Vector) -> Self {
        Self::new([[1.0, 0.0, v.x], [0.0, 1.0, v.y], [0.0, 0.0, 1.0]])
    }

    /// Rotation by `angle` about `center`: `T(center) * R(angle) * T(-center)`.
    pub fn rotation_about(center: Point, angle: f64) -> Self {
        let c = center.to_vector();
        Self::translation(c) * Self::rotation(angle) * Self::translation(-c)
    }

    /// Constructs a homogeneous matrix from a 2D affine transform.
    ///
    /// The expected 6-element layout is `[a, b, c, d, e, f]` such that:
    ///
    /// - `x' = a*x + c*y + e`
    /// - `y' = b*x + d*y + f`
    ///
    /// Extra elements are ignored.
    pub fn from_affine(coeffs: &[f64]) -> MathResult<Self> {
        let [a, b, c, d, e, f] = match coeffs {
            [a, b, c, d, e, f, ..] => [*a, *b, *c, *d, *e, *f],
            _ => {
                return Err(MathError::Shape {
                    expected: 6,
                    found: coeffs.len(),
                });
            }
        };
        Ok(Self::new([[a, c, e], [b, d, f], [0.0, 0.0, 1.0]]))
    }

    /// Applies this transform to `(x, y, 1)` and drops the homogeneous term.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.values;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        p.transformed(self)
    }

    /// Returns a transform that applies `self`, then `next`.
    #[inline]
    pub fn then(self, next: Mat3) -> Self {
        next * self
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.values;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate. Fails when the determinant is zero or not finite.
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::debug!("cannot invert matrix {:?}: determinant {det}", self.values);
            return Err(MathError::Singular { determinant: det });
        }
        let m = &self.values;
        let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        let adj = [
            [cof(1, 2, 1, 2), -cof(0, 2, 1, 2), cof(0, 1, 1, 2)],
            [-cof(1, 2, 0, 2), cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
            [cof(1, 2, 0, 1), -cof(0, 2, 0, 1), cof(0, 1, 0, 1)],
        ];
        let inv = 1.0 / det;
        Ok(Self::new(adj.map(|row| row.map(|v| v * inv))))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}
