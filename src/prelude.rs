//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use engram::prelude::*;
//! ```

pub use crate::bipolar::{format_pattern, from_bipolar, to_bipolar};
pub use crate::error::EngramError;
pub use crate::hopfield::HopfieldNetwork;
pub use crate::primitives::{math, Matrix, PrintOptions};
