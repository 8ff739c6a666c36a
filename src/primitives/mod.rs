//! Core compute primitives (Matrix and its arithmetic).
//!
//! These types provide the foundation for the associative memory engine.

pub mod math;
mod matrix;

pub use matrix::{print, write_matrix, Matrix, PrintOptions};
