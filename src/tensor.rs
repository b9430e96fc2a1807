//! Tensor type and shape checks.
//!
//! Every layer works on rank-2, batch-major `f64` matrices: axis 0 is the
//! batch (free to change between calls) and axis 1 is the feature width.

use crate::error::{LayerError, Result};
use ndarray::Array2;

/// Batch × features matrix of 64-bit floats.
pub type Tensor = Array2<f64>;

/// `(rows, cols)` of a tensor.
#[inline]
pub fn dims(tensor: &Tensor) -> (usize, usize) {
    tensor.dim()
}

/// Fails with [`LayerError::ShapeMismatch`] unless `tensor` is exactly `expected`.
pub fn ensure_shape(
    tensor: &Tensor,
    expected: (usize, usize),
    layer: &'static str,
    op: &'static str,
) -> Result<()> {
    let actual = dims(tensor);
    if actual != expected {
        return Err(LayerError::ShapeMismatch {
            layer,
            op,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fails unless the feature axis of `tensor` has width `width`.
pub fn ensure_width(
    tensor: &Tensor,
    width: usize,
    layer: &'static str,
    op: &'static str,
) -> Result<()> {
    let (rows, cols) = dims(tensor);
    if cols != width {
        return Err(LayerError::ShapeMismatch {
            layer,
            op,
            expected: (rows, width),
            actual: (rows, cols),
        });
    }
    Ok(())
}
