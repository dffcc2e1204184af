//! Free 2D displacement with magnitude and direction.

use core::fmt;
use core::ops;

use crate::error::{MathError, MathResult};

/// A 2D vector. Angles are in radians from the positive x axis.
///
/// Mutating operations (`add`, `subtract`, `multiply`, `normalize`, `rotate`)
/// modify the receiver and return it, so they chain:
/// `v.add(a).multiply(2.0).rotate(angle)`. Operations that produce a
/// different vector (`projection`, `rejection`) return a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds `(length * cos(angle), length * sin(angle))`.
    #[inline]
    pub fn from_angle_length(angle: f64, length: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    #[inline]
    pub fn add(&mut self, v: Vector) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    #[inline]
    pub fn subtract(&mut self, v: Vector) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    #[inline]
    pub fn multiply(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    #[inline]
    pub fn dot(&self, v: Vector) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Euclidean norm. Prefer [`Vector::length_squared`] when only comparing.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// `atan2(y, x)`, in `(-pi, pi]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Scales to unit length in place.
    ///
    /// A zero vector is not guarded: both components become NaN.
    /// Use [`Vector::checked_normalize`] to get an error instead.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self
    }

    #[inline]
    pub fn normalized(self) -> Vector {
        let mut v = self;
        v.normalize();
        v
    }

    pub fn checked_normalize(self) -> MathResult<Vector> {
        if self.length_squared() == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// Rotates counter-clockwise by `angle` radians in place.
    #[inline]
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let x = self.x * c - self.y * s;
        let y = self.x * s + self.y * c;
        self.x = x;
        self.y = y;
        self
    }

    /// Component of `self` parallel to `target`, as a new vector.
    ///
    /// NaN when `target` is the zero vector.
    pub fn projection(&self, target: Vector) -> Vector {
        let k = self.dot(target) / target.dot(target);
        Vector::new(target.x * k, target.y * k)
    }

    pub fn checked_projection(&self, target: Vector) -> MathResult<Vector> {
        if target.length_squared() == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(self.projection(target))
    }

    /// Component of `self` orthogonal to `target`, as a new vector.
    pub fn rejection(&self, target: Vector) -> Vector {
        let mut rejection = *self;
        rejection.subtract(self.projection(target));
        rejection
    }

    /// Signed length of `self` along `target`.
    #[inline]
    pub fn scalar_projection(&self, target: Vector) -> f64 {
        self.dot(target) / target.length()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Display::fmt(&self.x, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y, f)?;
        write!(f, ")")
    }
}

impl ops::Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl ops::Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl ops::AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        Vector::add(self, rhs);
    }
}

impl ops::SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.subtract(rhs);
    }
}

impl ops::MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vector, b: Vector) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a} != {b}"
        );
    }

    fn samples() -> Vec<Vector> {
        vec![
            Vector::new(1.0, 0.0),
            Vector::new(3.0, 4.0),
            Vector::new(-2.5, 7.25),
            Vector::new(-1e3, -0.125),
            Vector::new(0.0, -6.0),
        ]
    }

    const ANGLES: [f64; 5] = [0.0, 0.3, FRAC_PI_2, -2.0, 3.0 * PI];

    #[test]
    fn from_angle_length_places_components() {
        let v = Vector::from_angle_length(FRAC_PI_2, 2.0);
        assert_close(v, Vector::new(0.0, 2.0));
        assert!((v.angle() - FRAC_PI_2).abs() < EPS);
        assert!((v.length() - 2.0).abs() < EPS);
    }

    #[test]
    fn clone_is_independent() {
        let v = Vector::new(1.0, 2.0);
        let mut c = v.clone();
        c.add(Vector::new(1.0, 1.0));
        assert_eq!(v, Vector::new(1.0, 2.0));
        assert_eq!(c, Vector::new(2.0, 3.0));
    }

    #[test]
    fn mutating_ops_chain() {
        let mut v = Vector::new(1.0, 2.0);
        v.add(Vector::new(1.0, 0.0))
            .multiply(2.0)
            .subtract(Vector::new(0.0, 4.0));
        assert_eq!(v, Vector::new(4.0, 0.0));
    }

    #[test]
    fn operators_match_methods() {
        let a = Vector::new(1.5, -2.0);
        let b = Vector::new(0.5, 4.0);
        let mut m = a;
        m.add(b).multiply(3.0);
        assert_eq!((a + b) * 3.0, m);
        assert_eq!(3.0 * (a + b), m);
        assert_eq!(a - b, Vector::new(1.0, -6.0));
        assert_eq!(-a, Vector::new(-1.5, 2.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        assert_eq!(c, Vector::new(3.0, -4.0));
    }

    #[test]
    fn dot_and_lengths() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.dot(Vector::new(2.0, -1.0)), 2.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        for v in samples() {
            assert!((v.length().powi(2) - v.length_squared()).abs() < EPS * v.length_squared().max(1.0));
            assert!(v.length() >= 0.0);
        }
    }

    #[test]
    fn angle_range() {
        assert!((Vector::new(-1.0, 0.0).angle() - PI).abs() < EPS);
        assert!((Vector::new(0.0, -1.0).angle() + FRAC_PI_2).abs() < EPS);
        assert_eq!(Vector::new(1.0, 0.0).angle(), 0.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut v = Vector::new(8.0, 9.0);
        v.rotate(FRAC_PI_2);
        assert_close(v, Vector::new(-9.0, 8.0));
    }

    #[test]
    fn rotate_is_invertible() {
        for v in samples() {
            for a in ANGLES {
                let mut r = v;
                r.rotate(a).rotate(-a);
                assert!((r.x - v.x).abs() < EPS * v.length().max(1.0));
                assert!((r.y - v.y).abs() < EPS * v.length().max(1.0));
            }
        }
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in samples() {
            let mut n = v;
            n.normalize();
            assert!((n.length() - 1.0).abs() < EPS);
            assert!((n.angle() - v.angle()).abs() < EPS);
            assert_eq!(v.normalized(), n);
        }
    }

    #[test]
    fn normalize_zero_propagates_nan() {
        let mut v = Vector::ZERO;
        v.normalize();
        assert!(v.x.is_nan() && v.y.is_nan());
        assert_eq!(Vector::ZERO.checked_normalize(), Err(MathError::ZeroLength));
        assert_close(
            Vector::new(0.0, 5.0).checked_normalize().unwrap(),
            Vector::new(0.0, 1.0),
        );
    }

    #[test]
    fn projection_onto_axis() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.projection(Vector::new(2.0, 0.0)), Vector::new(3.0, 0.0));
        assert_eq!(v.rejection(Vector::new(2.0, 0.0)), Vector::new(0.0, 4.0));
        assert_eq!(v.scalar_projection(Vector::new(0.0, -10.0)), -4.0);
        // projection does not touch the receiver
        assert_eq!(v, Vector::new(3.0, 4.0));
    }

    #[test]
    fn projection_plus_rejection_restores_vector() {
        let targets = [
            Vector::new(1.0, 1.0),
            Vector::new(-3.0, 0.5),
            Vector::new(0.0, 2.0),
        ];
        for v in samples() {
            for t in targets {
                let mut sum = v.projection(t);
                sum.add(v.rejection(t));
                assert!((sum.x - v.x).abs() < EPS * v.length().max(1.0));
                assert!((sum.y - v.y).abs() < EPS * v.length().max(1.0));
                assert!(v.rejection(t).dot(t).abs() < EPS * v.length().max(1.0) * t.length());
            }
        }
    }

    #[test]
    fn projection_onto_zero_is_nan() {
        let p = Vector::new(1.0, 2.0).projection(Vector::ZERO);
        assert!(p.x.is_nan() && p.y.is_nan());
        assert!(Vector::new(1.0, 2.0).scalar_projection(Vector::ZERO).is_nan());
        assert_eq!(
            Vector::new(1.0, 2.0).checked_projection(Vector::ZERO),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn display() {
        assert_eq!(Vector::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
