//! Errors for the opt-in checked operations.
//!
//! The plain kernel operations never fail: degenerate input shows up as
//! NaN/Inf in the result. Only `checked_*`, `Mat3::inverse` and
//! `Mat3::from_affine` report through this type.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MathError {
    #[error("vector has zero length")]
    ZeroLength,
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f64 },
    #[error("expected {expected} coefficients, found {found}")]
    Shape { expected: usize, found: usize },
}

pub type MathResult<T> = Result<T, MathError>;
