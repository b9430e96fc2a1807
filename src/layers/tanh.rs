//! Hyperbolic tangent layer
//!
//! Forward evaluates `-1 + 2 / (1 + exp(-2x))` and caches the raw input;
//! backward returns `error * (1 - tanh(x)^2)`.

use crate::error::{LayerError, Result};
use crate::layers::Layer;
use crate::tensor::{dims, ensure_shape, Tensor};
use crate::utils::activations::{tanh, tanh_derivative};
use ndarray::Zip;

/// Elementwise tanh with no parameters.
#[derive(Debug, Clone, Default)]
pub struct TanhLayer {
    cached_input: Option<Tensor>,
}

impl TanhLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for TanhLayer {
    fn name(&self) -> &'static str {
        "Tanh"
    }

    fn trainable(&self) -> bool {
        false
    }

    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        let output = input.mapv(tanh);
        self.cached_input = Some(input.clone());
        Ok(output)
    }

    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor> {
        let cached = self
            .cached_input
            .as_ref()
            .ok_or(LayerError::MissingCache { layer: "Tanh" })?;
        ensure_shape(upstream, dims(cached), "Tanh", "backward")?;

        Ok(Zip::from(upstream)
            .and(cached)
            .map_collect(|&error, &x| error * tanh_derivative(x)))
    }

    fn clear_cache(&mut self) {
        self.cached_input = None;
    }

    fn has_cache(&self) -> bool {
        self.cached_input.is_some()
    }
}
