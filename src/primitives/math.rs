//! Stateless matrix arithmetic.
//!
//! Every function validates operand compatibility up front and returns a new
//! matrix; operands are never mutated or aliased.
//!
//! # Examples
//!
//! ```
//! use engram::primitives::{math, Matrix};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("rectangular");
//! let i = math::identity(2).expect("n > 0");
//! assert_eq!(math::multiply(&a, &i).expect("2x2 * 2x2"), a);
//! ```

use super::Matrix;
use crate::error::{EngramError, Result};

fn check_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(EngramError::incompatible_shape(op, a.shape(), b.shape()));
    }
    Ok(())
}

/// Element-wise sum.
///
/// # Errors
///
/// Returns [`EngramError::IncompatibleShape`] unless both shapes are equal.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape("add", a, b)?;
    Ok(a.zip_map(b, |x, y| x + y))
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// Returns [`EngramError::IncompatibleShape`] unless both shapes are equal.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape("subtract", a, b)?;
    Ok(a.zip_map(b, |x, y| x - y))
}

/// Multiplies each element by a scalar.
#[must_use]
pub fn scalar_multiply(m: &Matrix, k: f64) -> Matrix {
    m.map(|x| x * k)
}

/// Divides each element by a scalar.
///
/// Division by zero follows IEEE-754 (infinities and NaN).
#[must_use]
pub fn scalar_divide(m: &Matrix, k: f64) -> Matrix {
    m.map(|x| x / k)
}

/// Matrix-matrix product `a * b`.
///
/// # Errors
///
/// Returns [`EngramError::IncompatibleShape`] unless `a.n_cols() == b.n_rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.n_cols() != b.n_rows() {
        return Err(EngramError::incompatible_shape("multiply", a.shape(), b.shape()));
    }

    let (rows, inner, cols) = (a.n_rows(), a.n_cols(), b.n_cols());
    let mut result = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += a.at(i, k) * b.at(k, j);
            }
            result[i * cols + j] = sum;
        }
    }

    Ok(Matrix::from_parts(rows, cols, result))
}

/// Transposes a matrix.
#[must_use]
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = a.shape();
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            data[j * rows + i] = a.at(i, j);
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// Creates an `n x n` identity matrix.
///
/// # Errors
///
/// Returns [`EngramError::InvalidDimensions`] if `n == 0`.
pub fn identity(n: usize) -> Result<Matrix> {
    let mut id = Matrix::zeros(n, n)?;
    for i in 0..n {
        id.set(i, i, 1.0)?;
    }
    Ok(id)
}

/// Dot product of two vectors over their flattened elements.
///
/// Orientation is irrelevant: a `1 x n` and an `n x 1` vector are compatible.
///
/// # Errors
///
/// Returns [`EngramError::NotVector`] if either operand is not a vector and
/// [`EngramError::IncompatibleShape`] if their lengths differ.
pub fn dot_product(v1: &Matrix, v2: &Matrix) -> Result<f64> {
    for v in [v1, v2] {
        if !v.is_vector() {
            return Err(EngramError::not_vector(v.shape()));
        }
    }
    let (a, b) = (v1.as_slice(), v2.as_slice());
    if a.len() != b.len() {
        return Err(EngramError::incompatible_shape(
            "dot_product",
            v1.shape(),
            v2.shape(),
        ));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Euclidean norm of a vector.
///
/// # Errors
///
/// Returns [`EngramError::NotVector`] if `v` is not a vector.
pub fn vector_length(v: &Matrix) -> Result<f64> {
    if !v.is_vector() {
        return Err(EngramError::not_vector(v.shape()));
    }
    Ok(v.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt())
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
