//! Elementwise activation functions and their derivatives
//!
//! Scalar versions are used by the activation layers through `mapv`/`Zip`.
//! None of them clip their input: overflow in `exp` yields `inf` and the
//! surrounding arithmetic resolves it per IEEE-754.

/// Logistic sigmoid: 1 / (1 + exp(-x)).
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative evaluated at the pre-activation `x`.
///
/// Returns s(x) * (1 - s(x)), which never exceeds 0.25.
#[inline]
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// Hyperbolic tangent written through the logistic form: -1 + 2 / (1 + exp(-2x)).
#[inline]
pub fn tanh(x: f64) -> f64 {
    -1.0 + 2.0 / (1.0 + (-2.0 * x).exp())
}

/// Tanh derivative evaluated at the pre-activation `x`: 1 - tanh(x)^2.
#[inline]
pub fn tanh_derivative(x: f64) -> f64 {
    let t = tanh(x);
    1.0 - t * t
}

/// Rectified linear unit: max(0, x). NaN passes through.
#[inline]
pub fn relu(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// ReLU sub-gradient. The gradient passes at exactly zero.
#[inline]
pub fn relu_derivative(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}
