//! Layer trait definition
//!
//! Every layer type implements this trait to provide a uniform interface for
//! forward and backward propagation.

use crate::error::Result;
use crate::tensor::Tensor;

/// Core trait for layers of a feed-forward network.
///
/// A layer is a small two-state machine. After construction it is idle and
/// `backward` fails with [`LayerError::MissingCache`]. A successful `forward`
/// stores whatever the layer needs to differentiate (its cache) and every later
/// `backward` reads it. Composing layers is left to the caller: run `forward`
/// through the layers in order, then `backward` in reverse, feeding each
/// returned gradient to the previous layer.
///
/// All tensors are batch-major `f64` matrices. The batch size may change from
/// one `forward` to the next.
///
/// # Example
///
/// ```
/// use layer_backprop::layers::{Layer, ReluLayer};
/// use ndarray::array;
///
/// let mut relu = ReluLayer::new();
/// let out = relu.forward(&array![[-1.0, 2.0]]).unwrap();
/// assert_eq!(out, array![[0.0, 2.0]]);
///
/// let grad = relu.backward(&array![[5.0, 5.0]]).unwrap();
/// assert_eq!(grad, array![[0.0, 5.0]]);
/// ```
///
/// [`LayerError::MissingCache`]: crate::error::LayerError::MissingCache
pub trait Layer {
    /// Short name used in error messages.
    fn name(&self) -> &'static str;

    /// Whether the layer owns parameters meant to be optimised.
    ///
    /// Constant for a given layer type.
    fn trainable(&self) -> bool;

    /// Forward propagation.
    ///
    /// Returns the layer output for `input` (batch × in_dim) and overwrites the
    /// cache used by the next `backward`. On error the previous cache is kept.
    fn forward(&mut self, input: &Tensor) -> Result<Tensor>;

    /// Backward propagation.
    ///
    /// Takes the gradient of the loss with respect to this layer's output
    /// (batch × out_dim) and returns the gradient with respect to its input
    /// (batch × in_dim). Trainable layers also overwrite their stored parameter
    /// gradients. On error nothing stored in the layer changes.
    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor>;

    /// Number of trainable scalars owned by the layer.
    fn parameter_count(&self) -> usize {
        0
    }

    /// Drop the forward cache, returning the layer to the idle state.
    fn clear_cache(&mut self);

    /// Whether a forward cache is currently held.
    fn has_cache(&self) -> bool;
}
