//! Logistic sigmoid layer
//!
//! Forward computes `1 / (1 + exp(-x))` elementwise and caches the raw input.
//! Backward recomputes `s = sigmoid(x)` from the cache and returns
//! `error * s * (1 - s)`.
//!
//! The input is not clipped. For very negative `x`, `exp(-x)` overflows to
//! `inf` and the output is exactly `0.0`, with a zero local derivative.

use crate::error::{LayerError, Result};
use crate::layers::Layer;
use crate::tensor::{dims, ensure_shape, Tensor};
use crate::utils::activations::{sigmoid, sigmoid_derivative};
use ndarray::Zip;

/// Elementwise logistic sigmoid with no parameters.
#[derive(Debug, Clone, Default)]
pub struct SigmoidLayer {
    cached_input: Option<Tensor>,
}

impl SigmoidLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for SigmoidLayer {
    fn name(&self) -> &'static str {
        "Sigmoid"
    }

    fn trainable(&self) -> bool {
        false
    }

    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        let output = input.mapv(sigmoid);
        self.cached_input = Some(input.clone());
        Ok(output)
    }

    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor> {
        let cached = self
            .cached_input
            .as_ref()
            .ok_or(LayerError::MissingCache { layer: "Sigmoid" })?;
        ensure_shape(upstream, dims(cached), "Sigmoid", "backward")?;

        Ok(Zip::from(upstream)
            .and(cached)
            .map_collect(|&error, &x| error * sigmoid_derivative(x)))
    }

    fn clear_cache(&mut self) {
        self.cached_input = None;
    }

    fn has_cache(&self) -> bool {
        self.cached_input.is_some()
    }
}
