//! Layer Backprop Library
//!
//! Forward and backward passes for the layers of a feed-forward network
//! trained by gradient descent: a trainable dense (affine) layer and the
//! sigmoid, tanh and ReLU nonlinearities.
//!
//! Each layer caches what it needs during `forward` and uses it in the
//! following `backward` to return the gradient with respect to its input.
//! The dense layer additionally stores gradients for its weights and biases.
//! Applying those gradients, batching data and chaining layers into a network
//! are left to the caller.
//!
//! # Modules
//!
//! - `layers`: Layer trait and implementations (Dense, Sigmoid, Tanh, ReLU)
//! - `init`: Weight initializer contract and the seeded default
//! - `architecture`: JSON layer configuration
//! - `tensor`: Tensor type and shape checks
//! - `error`: Error type
//! - `utils`: Scalar activation functions and RNG
//!
//! # Example
//!
//! ```
//! use layer_backprop::layers::{DenseLayer, GradientMode, Layer, SigmoidLayer};
//! use layer_backprop::init::SeededInitializer;
//! use ndarray::array;
//!
//! let mut init = SeededInitializer::new(42);
//! let mut dense = DenseLayer::new(2, 1, "xavier-average", &mut init)
//!     .unwrap()
//!     .with_gradient_mode(GradientMode::Corrected);
//! let mut sigmoid = SigmoidLayer::new();
//!
//! let x = array![[0.0, 1.0], [1.0, 0.0]];
//! let y = sigmoid.forward(&dense.forward(&x).unwrap()).unwrap();
//! assert_eq!(y.dim(), (2, 1));
//!
//! let grad = dense.backward(&sigmoid.backward(&(&y - 1.0)).unwrap()).unwrap();
//! assert_eq!(grad.dim(), (2, 2));
//! assert_eq!(dense.weight_gradients().dim(), (2, 1));
//! ```

#[cfg(feature = "blas")]
extern crate blas_src;

pub mod architecture;
pub mod error;
pub mod init;
pub mod layers;
pub mod tensor;
pub mod utils;

pub use error::{LayerError, Result};
pub use layers::{AnyLayer, DenseLayer, GradientMode, Layer, ReluLayer, SigmoidLayer, TanhLayer};
pub use tensor::Tensor;
