//! Closed set of layer variants behind one type.
//!
//! `AnyLayer` lets callers keep a heterogeneous list without boxing. It
//! forwards every [`Layer`] method to the wrapped variant.

use crate::error::Result;
use crate::layers::{DenseLayer, Layer, ReluLayer, SigmoidLayer, TanhLayer};
use crate::tensor::Tensor;

#[derive(Debug, Clone)]
pub enum AnyLayer {
    Dense(DenseLayer),
    Sigmoid(SigmoidLayer),
    Tanh(TanhLayer),
    Relu(ReluLayer),
}

impl AnyLayer {
    fn inner(&self) -> &dyn Layer {
        match self {
            AnyLayer::Dense(l) => l,
            AnyLayer::Sigmoid(l) => l,
            AnyLayer::Tanh(l) => l,
            AnyLayer::Relu(l) => l,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Layer {
        match self {
            AnyLayer::Dense(l) => l,
            AnyLayer::Sigmoid(l) => l,
            AnyLayer::Tanh(l) => l,
            AnyLayer::Relu(l) => l,
        }
    }

    /// The dense layer inside, if this is one.
    pub fn as_dense(&self) -> Option<&DenseLayer> {
        match self {
            AnyLayer::Dense(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dense_mut(&mut self) -> Option<&mut DenseLayer> {
        match self {
            AnyLayer::Dense(l) => Some(l),
            _ => None,
        }
    }
}

impl Layer for AnyLayer {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn trainable(&self) -> bool {
        self.inner().trainable()
    }

    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        self.inner_mut().forward(input)
    }

    fn backward(&mut self, upstream: &Tensor) -> Result<Tensor> {
        self.inner_mut().backward(upstream)
    }

    fn parameter_count(&self) -> usize {
        self.inner().parameter_count()
    }

    fn clear_cache(&mut self) {
        self.inner_mut().clear_cache()
    }

    fn has_cache(&self) -> bool {
        self.inner().has_cache()
    }
}

impl From<DenseLayer> for AnyLayer {
    fn from(layer: DenseLayer) -> Self {
        AnyLayer::Dense(layer)
    }
}

impl From<SigmoidLayer> for AnyLayer {
    fn from(layer: SigmoidLayer) -> Self {
        AnyLayer::Sigmoid(layer)
    }
}

impl From<TanhLayer> for AnyLayer {
    fn from(layer: TanhLayer) -> Self {
        AnyLayer::Tanh(layer)
    }
}

impl From<ReluLayer> for AnyLayer {
    fn from(layer: ReluLayer) -> Self {
        AnyLayer::Relu(layer)
    }
}
