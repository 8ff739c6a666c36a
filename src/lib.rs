//! Engram: Hopfield associative memory in pure Rust.
//!
//! Engram stores bit patterns in a Hopfield network with one-shot Hebbian
//! learning and recalls the closest stored pattern from a noisy probe in a
//! single synchronous pass. The network is built on a small dense matrix
//! primitive with validated arithmetic.
//!
//! # Quick Start
//!
//! ```
//! use engram::prelude::*;
//!
//! let mut net = HopfieldNetwork::new(4).unwrap();
//! net.train(&[true, true, false, false]).unwrap();
//!
//! // Inspect the learned weights
//! assert_eq!(net.weights().get(0, 1).unwrap(), 1.0);
//! assert_eq!(net.weights().get(0, 0).unwrap(), 0.0);
//!
//! // Recall from a corrupted probe
//! let output = net.present(&[true, false, false, false]).unwrap();
//! assert_eq!(output, vec![true, true, false, false]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Dense `Matrix` type and its arithmetic ([`primitives::math`])
//! - [`bipolar`]: Boolean to bipolar (-1/+1) conversion
//! - [`hopfield`]: Hopfield network training and recall
//! - [`error`]: Error type shared by every fallible operation
//!
//! # Logging
//!
//! Network operations emit `tracing` events at `debug` and `trace` level.
//! The crate never installs a subscriber.

pub mod bipolar;
pub mod error;
pub mod hopfield;
pub mod prelude;
pub mod primitives;

pub use error::{EngramError, Result};
pub use hopfield::HopfieldNetwork;
pub use primitives::Matrix;
