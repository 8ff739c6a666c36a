//! Hopfield associative memory.
//!
//! A Hopfield network is a single, fully connected layer of binary units.
//! Patterns are stored with one-shot Hebbian learning and recalled with a
//! single synchronous threshold pass.
//!
//! # Learning rule
//!
//! For a bipolar row vector `r` the contribution of one pattern is
//! `rᵀr - I`: the outer product with its diagonal cancelled, so no unit
//! connects to itself. Contributions are summed into the weight matrix with
//! no normalization, so weight magnitudes grow with every `train` call. That
//! growth is the intended behavior of the rule.
//!
//! # Recall
//!
//! Unit `j` fires iff the dot product of the bipolar input with column `j` of
//! the weight matrix is strictly positive. The pass runs once; the output is
//! not fed back.
//!
//! # Example
//!
//! ```
//! use engram::hopfield::HopfieldNetwork;
//!
//! let mut net = HopfieldNetwork::new(4).expect("size > 0");
//! net.train(&[true, true, false, false]).expect("pattern fits");
//!
//! // A one-bit corruption is pulled back to the stored pattern.
//! let recalled = net.present(&[true, false, false, false]).expect("pattern fits");
//! assert_eq!(recalled, vec![true, true, false, false]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bipolar::{format_pattern, to_bipolar_vec};
use crate::error::{EngramError, Result};
use crate::primitives::{math, Matrix};

/// Single-layer Hopfield network over `size` binary units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetworkSnapshot")]
pub struct HopfieldNetwork {
    /// Square `size x size` connection weights; diagonal is always zero.
    weights: Matrix,
    /// Patterns accumulated since creation or the last reset.
    patterns: usize,
}

#[derive(Deserialize)]
struct NetworkSnapshot {
    weights: Matrix,
    patterns: usize,
}

impl TryFrom<NetworkSnapshot> for HopfieldNetwork {
    type Error = EngramError;

    fn try_from(snapshot: NetworkSnapshot) -> Result<Self> {
        let weights = snapshot.weights;
        if !weights.is_square() {
            return Err(EngramError::InvalidWeights {
                reason: "weight matrix is not square",
            });
        }
        if (0..weights.n_rows()).any(|i| weights.at(i, i) != 0.0) {
            return Err(EngramError::InvalidWeights {
                reason: "weight matrix has a self-connection",
            });
        }
        // Each stored pattern moves a weight by at most 1.
        let bound = snapshot.patterns as f64;
        if weights.as_slice().iter().any(|w| w.is_nan() || w.abs() > bound) {
            return Err(EngramError::InvalidWeights {
                reason: "weight exceeds the stored pattern count",
            });
        }
        Ok(Self {
            weights,
            patterns: snapshot.patterns,
        })
    }
}

impl HopfieldNetwork {
    /// Creates an untrained network with all-zero weights.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::InvalidDimensions`] if `size == 0`.
    pub fn new(size: usize) -> Result<Self> {
        let weights = Matrix::zeros(size, size)?;
        debug!(size, "created hopfield network");
        Ok(Self {
            weights,
            patterns: 0,
        })
    }

    /// Number of units in the network.
    #[must_use]
    pub fn size(&self) -> usize {
        self.weights.n_rows()
    }

    /// Read-only view of the weight matrix.
    #[must_use]
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Number of patterns stored since creation or the last [`reset`](Self::reset).
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Returns true once at least one pattern has been stored.
    ///
    /// Contributions can cancel, so a trained network may still have
    /// all-zero weights.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.patterns > 0
    }

    fn check_len(&self, pattern: &[bool]) -> Result<()> {
        if pattern.len() != self.size() {
            return Err(EngramError::size_mismatch(self.size(), pattern.len()));
        }
        Ok(())
    }

    fn bipolar_row(pattern: &[bool]) -> Result<Matrix> {
        Matrix::row_vector(&to_bipolar_vec(pattern))
    }

    /// Stores a pattern by adding its Hebbian contribution to the weights.
    ///
    /// Calling `train` repeatedly superimposes patterns; the order of calls
    /// does not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::SizeMismatch`] if `pattern.len() != size()`.
    /// The weights are left untouched on error.
    pub fn train(&mut self, pattern: &[bool]) -> Result<()> {
        self.check_len(pattern)?;
        debug!(size = self.size(), pattern = %format_pattern(pattern), "training pattern");

        let row = Self::bipolar_row(pattern)?;
        let outer = math::multiply(&math::transpose(&row), &row)?;
        let contribution = math::subtract(&outer, &math::identity(self.size())?)?;
        self.weights = math::add(&self.weights, &contribution)?;
        self.patterns += 1;

        trace!(
            patterns = self.patterns,
            weight_sum = self.weights.sum(),
            "weights updated"
        );
        Ok(())
    }

    /// Presents a pattern and returns the network's one-pass response.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::SizeMismatch`] if `pattern.len() != size()`.
    pub fn present(&self, pattern: &[bool]) -> Result<Vec<bool>> {
        self.check_len(pattern)?;

        let input = Self::bipolar_row(pattern)?;
        let output = (0..self.size())
            .map(|col| {
                let activation = math::dot_product(&input, &self.weights.column(col)?)?;
                Ok(activation > 0.0)
            })
            .collect::<Result<Vec<bool>>>()?;

        debug!(
            input = %format_pattern(pattern),
            output = %format_pattern(&output),
            "presented pattern"
        );
        Ok(output)
    }

    /// Forgets every stored pattern, returning the network to its untrained state.
    pub fn reset(&mut self) {
        self.weights.clear();
        self.patterns = 0;
        debug!(size = self.size(), "weights reset");
    }
}

#[cfg(test)]
#[path = "hopfield_tests.rs"]
mod tests;
