//! Boolean to bipolar conversion and back.
//!
//! Bipolar form encodes `false` as `-1.0` and `true` as `+1.0`. The encoding
//! is self-inverse under negation, which keeps the Hebbian outer product
//! symmetric between the two states.

use crate::error::{EngramError, Result};

/// Bipolar value of a single bit.
#[must_use]
pub fn to_bipolar(bit: bool) -> f64 {
    if bit {
        1.0
    } else {
        -1.0
    }
}

/// Bipolar values of a bit pattern, in order.
#[must_use]
pub fn to_bipolar_vec(bits: &[bool]) -> Vec<f64> {
    bits.iter().copied().map(to_bipolar).collect()
}

/// Decodes a bipolar value back to a bit.
///
/// # Errors
///
/// Returns [`EngramError::InvalidBipolarValue`] unless `value` is exactly
/// `-1.0` or `1.0`.
pub fn from_bipolar(value: f64) -> Result<bool> {
    if value == 1.0 {
        Ok(true)
    } else if value == -1.0 {
        Ok(false)
    } else {
        Err(EngramError::InvalidBipolarValue { value })
    }
}

/// Decodes a slice of bipolar values, failing on the first invalid one.
///
/// # Errors
///
/// Returns [`EngramError::InvalidBipolarValue`] for the first value that is
/// neither `-1.0` nor `1.0`.
pub fn from_bipolar_slice(values: &[f64]) -> Result<Vec<bool>> {
    values.iter().copied().map(from_bipolar).collect()
}

/// Compact text form of a pattern, e.g. `[T,T,F,F]`.
#[must_use]
pub fn format_pattern(bits: &[bool]) -> String {
    let cells: Vec<&str> = bits.iter().map(|&b| if b { "T" } else { "F" }).collect();
    format!("[{}]", cells.join(","))
}
