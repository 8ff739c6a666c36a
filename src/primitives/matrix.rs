//! Matrix type for 2D numeric data.

use std::fmt;
use std::io;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{EngramError, Result};

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// The shape is fixed at construction and every accessor is bounds-checked
/// against it. All indices are 0-based.
///
/// # Examples
///
/// ```
/// use engram::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2).expect("in bounds"), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; deserialization goes through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct MatrixData {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = EngramError;

    fn try_from(raw: MatrixData) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Field layout used when rendering a matrix as text.
///
/// The default (width 10, precision 4) is the layout used by [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Minimum field width per value, right-aligned
    pub width: usize,
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            width: 10,
            precision: 4,
        }
    }
}

impl PrintOptions {
    /// Sets the field width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the number of decimal places.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Number of cells in a `rows x cols` matrix.
///
/// Zero dimensions and products that overflow `usize` are both rejected.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(EngramError::InvalidDimensions { rows, cols }),
    }
}

impl Matrix {
    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] if either dimension is zero
    /// or `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, if `rows * cols`
    /// overflows, or if the data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(EngramError::DimensionMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a rectangular 2D layout.
    ///
    /// The shape is inferred: `rows` is the outer length and `cols` the length
    /// of the first row.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] for an empty layout or empty
    /// first row, and [`EngramError::RaggedRows`] if any row's length differs
    /// from the first.
    pub fn from_rows<R: AsRef<[f64]>>(layout: &[R]) -> Result<Self> {
        let rows = layout.len();
        let cols = layout.first().map_or(0, |r| r.as_ref().len());
        let len = element_count(rows, cols)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in layout.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(EngramError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a `1 x n` row vector from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] if `values` is empty.
    pub fn row_vector(values: &[f64]) -> Result<Self> {
        Self::from_vec(1, values.len(), values.to_vec())
    }

    /// Creates an `n x 1` column vector from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] if `values` is empty.
    pub fn column_vector(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.len(), 1, values.to_vec())
    }

    /// Creates a matrix with values drawn uniformly from `[-1, 1)`.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `seed` - Optional random seed for reproducibility
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] if either dimension is zero
    /// or `rows * cols` overflows.
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let data = (0..len).map(|_| rng.gen_range(-1.0_f64..1.0)).collect();
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(EngramError::index_out_of_bounds(row, col, self.shape()));
        }
        Ok(row * self.cols + col)
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::IndexOutOfBounds`] if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::IndexOutOfBounds`] if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Adds `delta` to the element at (row, col) in place.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::IndexOutOfBounds`] if indices are out of bounds.
    pub fn add_at(&mut self, row: usize, col: usize, delta: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] += delta;
        Ok(())
    }

    /// Returns a copy of a row as a `1 x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::IndexOutOfBounds`] if `row_idx >= rows`.
    pub fn row(&self, row_idx: usize) -> Result<Self> {
        if row_idx >= self.rows {
            return Err(EngramError::index_out_of_bounds(row_idx, 0, self.shape()));
        }
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Ok(Self {
            data: self.data[start..end].to_vec(),
            rows: 1,
            cols: self.cols,
        })
    }

    /// Returns a copy of a column as a `rows x 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::IndexOutOfBounds`] if `col_idx >= cols`.
    pub fn column(&self, col_idx: usize) -> Result<Self> {
        if col_idx >= self.cols {
            return Err(EngramError::index_out_of_bounds(0, col_idx, self.shape()));
        }
        let data: Vec<f64> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: 1,
        })
    }

    /// Resets every element to zero in place.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0.0);
    }

    /// Returns true if the matrix has exactly one row or exactly one column.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// Returns true if every element equals zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns an owned row-major copy of all elements.
    #[must_use]
    pub fn to_flat_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Renders the matrix one row per line using the given field layout.
    #[must_use]
    pub fn render(&self, options: &PrintOptions) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * options.width + 1));
        for row in self.data.chunks(self.cols) {
            for value in row {
                out.push_str(&format!(
                    "{value:>width$.prec$}",
                    width = options.width,
                    prec = options.precision
                ));
            }
            out.push('\n');
        }
        out
    }

    /// Elementwise combination of two same-shaped matrices.
    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise map over every cell.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Unchecked read used by arithmetic kernels that have already validated shapes.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Builds a matrix from parts whose consistency the caller guarantees.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrintOptions::default()))
    }
}

/// Writes the default rendering of a matrix followed by one blank line.
///
/// The blank line separates consecutive matrices in console output.
///
/// # Errors
///
/// Returns any error reported by `writer`.
pub fn write_matrix<W: io::Write>(writer: &mut W, matrix: &Matrix) -> io::Result<()> {
    writeln!(writer, "{matrix}")
}

/// Writes a matrix to stdout in the [`write_matrix`] layout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print(matrix: &Matrix) -> io::Result<()> {
    write_matrix(&mut io::stdout().lock(), matrix)
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
