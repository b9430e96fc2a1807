//! Shared utilities for the layer implementations
//!
//! Scalar activation functions used by the elementwise layers and the
//! seeded random number generator behind weight initialisation.

pub mod activations;
pub mod rng;

pub use rng::SimpleRng;
