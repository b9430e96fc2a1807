//! Layer abstractions
//!
//! This module provides the Layer trait, the trainable dense layer and the
//! elementwise activation layers, plus the `AnyLayer` sum type over all of them.

mod r#trait;
pub mod any;
pub mod dense;
pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export the Layer trait for convenience
pub use any::AnyLayer;
pub use dense::{DenseLayer, GradientMode};
pub use r#trait::Layer;
pub use relu::ReluLayer;
pub use sigmoid::SigmoidLayer;
pub use tanh::TanhLayer;
