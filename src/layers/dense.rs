//! Dense (fully connected) layer implementation
//!
//! This module provides a DenseLayer (also known as Linear or Fully Connected layer)
//! that performs the transformation: output = input × weights + biases
//!
//! # Backward pass
//!
//! Given the upstream error `E` (batch × out):
//!
//! ```text
//! bias_gradients   = Σ_batch E                 (1 × out)
//! weight_gradients = C^T · E                   (see GradientMode)
//! downstream       = E · W^T                   (batch × in)
//! ```
//!
//! `C` is the cached forward value. No averaging over the batch is applied.

use crate::error::{LayerError, Result};
use crate::init::WeightInitializer;
use crate::layers::Layer;
use crate::tensor::{dims, ensure_shape, ensure_width, Tensor};
use ndarray::{ArrayView2, ArrayViewMut2, Axis};
use serde::Deserialize;

/// Which forward value the weight gradient is computed from.
///
/// `Reference` reproduces the established numerics of this layer: the forward
/// *output* is cached and transposed, so the weight gradient is
/// `output^T · error` with shape `(out, out)`. That only matches the weight
/// shape when `in == out`, and it is not the chain-rule gradient.
///
/// `Corrected` caches the forward *input* and produces the chain-rule gradient
/// `input^T · error` with shape `(in, out)`.
///
/// The downstream gradient `error · W^T` is identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientMode {
    #[default]
    Reference,
    Corrected,
}

/// Dense (fully connected) layer with weights and biases.
///
/// Performs the affine transformation: y = xW + b
/// where x is the input (batch_size × input_size),
/// W is the weight matrix (input_size × output_size),
/// and b is the bias row (1 × output_size) broadcast over the batch.
///
/// Gradients are stored, never applied: an external optimiser reads
/// `weight_gradients`/`bias_gradients` and writes through `weights_mut`/`biases_mut`.
///
/// # Example
///
/// ```
/// use layer_backprop::layers::{DenseLayer, Layer};
/// use ndarray::array;
///
/// let mut layer = DenseLayer::from_parameters(array![[1.0], [2.0]], array![[0.0]]).unwrap();
/// let y = layer.forward(&array![[1.0, 1.0]]).unwrap();
/// assert_eq!(y, array![[3.0]]);
///
/// let dx = layer.backward(&array![[1.0]]).unwrap();
/// assert_eq!(dx, array![[1.0, 2.0]]);
/// assert_eq!(layer.bias_gradients(), &array![[1.0]]);
/// ```
#[derive(Debug, Clone)]
pub struct DenseLayer {
    input_size: usize,
    output_size: usize,
    weights: Tensor,
    biases: Tensor,
    weight_gradients: Tensor,
    bias_gradients: Tensor,
    mode: GradientMode,
    cache: Option<Tensor>,
}

impl DenseLayer {
    /// Create a new DenseLayer with weights from `initializer`.
    ///
    /// Biases start at zero. `method` is passed through to the initializer
    /// untouched (see [`crate::init::InitMethod`] for the built-in tags).
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` if either size is zero
    /// * whatever the initializer returns for `method`
    /// * `ShapeMismatch` if the initializer hands back the wrong shape
    pub fn new(
        input_size: usize,
        output_size: usize,
        method: &str,
        initializer: &mut dyn WeightInitializer,
    ) -> Result<Self> {
        if input_size == 0 || output_size == 0 {
            return Err(LayerError::InvalidConfig(format!(
                "dense layer sizes must be positive, got {}x{}",
                input_size, output_size
            )));
        }

        let weights = initializer.initialize((input_size, output_size), method)?;
        ensure_shape(&weights, (input_size, output_size), "Dense", "initialize")?;

        Ok(Self::assemble(weights, Tensor::zeros((1, output_size))))
    }

    /// Create a DenseLayer from explicit parameters.
    ///
    /// `weights` is `(input_size, output_size)` and `biases` must be `(1, output_size)`.
    pub fn from_parameters(weights: Tensor, biases: Tensor) -> Result<Self> {
        let (input_size, output_size) = dims(&weights);
        if input_size == 0 || output_size == 0 {
            return Err(LayerError::InvalidConfig(format!(
                "dense layer sizes must be positive, got {}x{}",
                input_size, output_size
            )));
        }
        ensure_shape(&biases, (1, output_size), "Dense", "from_parameters")?;

        Ok(Self::assemble(weights, biases))
    }

    fn assemble(weights: Tensor, biases: Tensor) -> Self {
        let (input_size, output_size) = dims(&weights);
        Self {
            input_size,
            output_size,
            weight_gradients: Tensor::zeros(weights.raw_dim()),
            bias_gradients: Tensor::zeros(biases.raw_dim()),
            weights,
            biases,
            mode: GradientMode::default(),
            cache: None,
        }
    }

    /// Select how the weight gradient is computed.
    ///
    /// Drops any existing cache, since the cached value depends on the mode.
    pub fn with_gradient_mode(mut self, mode: GradientMode) -> Self {
        self.mode = mode;
        self.cache = None;
        self
    }

    pub fn gradient_mode(&self) -> GradientMode {
        self.mode
    }

    /// Get the input size of the layer.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the output size of the layer.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    /// Mutable view of the weights. The shape is fixed.
    pub fn weights_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.weights.view_mut()
    }

    pub fn biases(&self) -> &Tensor {
        &self.biases
    }

    /// Mutable view of the bias row. The shape is fixed.
    pub fn biases_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.biases.view_mut()
    }

    /// Weight gradient from the most recent `backward`.
    ///
    /// Zeros of the weight shape before any backward. Afterwards its shape is
    /// `(out, out)` in [`GradientMode::Reference`] and `(in, out)` in
    /// [`GradientMode::Corrected`].
    pub fn weight_gradients(&self) -> &Tensor {
        &self.weight_gradients
    }

    /// Bias gradient `(1, out)` from the most recent `backward`.
    pub fn bias_gradients(&self) -> &Tensor {
        &self.bias_gradients
    }

    /// The value cached by the last `forward`, if any.
    pub fn cached(&self) -> Option<ArrayView2<'_, f64>> {
        self.cache.as_ref().map(|c| c.view())
    }
}

impl Layer for DenseLayer {
    fn name(&self) -> &'static str {
        "Dense"
    }

    fn trainable(&self) -> bool {
        true
    }

    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        ensure_width(input, self.input_size, self.name(), "forward")?;

        let output = input.dot(&self.weights) + &self.biases;
        self.cache = Some(match self.mode {
            GradientMode::Reference => output.clone(),
            GradientMode::Corrected => input.clone(),
        });
        Ok(output)
    }

    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor> {
        let cached = self
            .cache
            .as_ref()
            .ok_or(LayerError::MissingCache { layer: "Dense" })?;
        ensure_shape(
            upstream,
            (cached.nrows(), self.output_size),
            "Dense",
            "backward",
        )?;

        let bias_gradients = upstream.sum_axis(Axis(0)).insert_axis(Axis(0));
        let weight_gradients = cached.t().dot(upstream);
        let downstream = upstream.dot(&self.weights.t());

        self.bias_gradients = bias_gradients;
        self.weight_gradients = weight_gradients;
        Ok(downstream)
    }

    /// Returns input_size × output_size (weights) + output_size (biases).
    fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    fn clear_cache(&mut self) {
        self.cache = None;
    }

    fn has_cache(&self) -> bool {
        self.cache.is_some()
    }
}
