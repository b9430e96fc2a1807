//! Rectified linear unit layer
//!
//! Forward is `max(0, x)`. Backward multiplies the error by the indicator
//! `x >= 0` of the cached input, so the gradient passes where the input was
//! exactly zero.

use crate::error::{LayerError, Result};
use crate::layers::Layer;
use crate::tensor::{dims, ensure_shape, Tensor};
use crate::utils::activations::{relu, relu_derivative};
use ndarray::Zip;

/// Elementwise ReLU with no parameters.
#[derive(Debug, Clone, Default)]
pub struct ReluLayer {
    cached_input: Option<Tensor>,
}

impl ReluLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for ReluLayer {
    fn name(&self) -> &'static str {
        "ReLU"
    }

    fn trainable(&self) -> bool {
        false
    }

    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        let output = input.mapv(relu);
        self.cached_input = Some(input.clone());
        Ok(output)
    }

    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor> {
        let cached = self
            .cached_input
            .as_ref()
            .ok_or(LayerError::MissingCache { layer: "ReLU" })?;
        ensure_shape(upstream, dims(cached), "ReLU", "backward")?;

        Ok(Zip::from(upstream)
            .and(cached)
            .map_collect(|&error, &x| error * relu_derivative(x)))
    }

    fn clear_cache(&mut self) {
        self.cached_input = None;
    }

    fn has_cache(&self) -> bool {
        self.cached_input.is_some()
    }
}
