//! Weight initialisation
//!
//! `DenseLayer` only depends on the [`WeightInitializer`] contract: given a
//! shape and a method tag, hand back a matrix of that shape. The tags
//! understood by [`SeededInitializer`] are listed on [`InitMethod`].

use crate::error::{LayerError, Result};
use crate::tensor::Tensor;
use crate::utils::SimpleRng;
use std::fmt;
use std::str::FromStr;

/// Method tag used when a configuration does not name one.
pub const DEFAULT_INIT_METHOD: &str = "xavier-average";

/// Source of initial weight matrices.
pub trait WeightInitializer {
    /// Produce a `(fan_in, fan_out)` matrix using the scheme named by `method`.
    fn initialize(&mut self, shape: (usize, usize), method: &str) -> Result<Tensor>;
}

/// Initialisation schemes known to [`SeededInitializer`].
///
/// All random schemes draw from a symmetric uniform distribution `[-limit, limit)`:
///
/// | tag              | limit                                  |
/// |------------------|----------------------------------------|
/// | `xavier-average` | sqrt(3 / ((fan_in + fan_out) / 2))     |
/// | `xavier-in`      | sqrt(3 / fan_in)                       |
/// | `xavier-out`     | sqrt(3 / fan_out)                      |
/// | `he`             | sqrt(6 / fan_in)                       |
/// | `zeros`          | all weights zero                       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMethod {
    XavierAverage,
    XavierIn,
    XavierOut,
    He,
    Zeros,
}

impl InitMethod {
    pub fn tag(self) -> &'static str {
        match self {
            InitMethod::XavierAverage => "xavier-average",
            InitMethod::XavierIn => "xavier-in",
            InitMethod::XavierOut => "xavier-out",
            InitMethod::He => "he",
            InitMethod::Zeros => "zeros",
        }
    }

    /// Half-width of the uniform sampling interval, `None` for `zeros`.
    pub fn limit(self, fan_in: usize, fan_out: usize) -> Option<f64> {
        let fan_in = fan_in as f64;
        let fan_out = fan_out as f64;
        match self {
            InitMethod::XavierAverage => Some((3.0 / ((fan_in + fan_out) / 2.0)).sqrt()),
            InitMethod::XavierIn => Some((3.0 / fan_in).sqrt()),
            InitMethod::XavierOut => Some((3.0 / fan_out).sqrt()),
            InitMethod::He => Some((6.0 / fan_in).sqrt()),
            InitMethod::Zeros => None,
        }
    }
}

impl FromStr for InitMethod {
    type Err = LayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xavier-average" => Ok(InitMethod::XavierAverage),
            "xavier-in" => Ok(InitMethod::XavierIn),
            "xavier-out" => Ok(InitMethod::XavierOut),
            "he" => Ok(InitMethod::He),
            "zeros" => Ok(InitMethod::Zeros),
            _ => Err(LayerError::UnknownInitialization(s.to_string())),
        }
    }
}

impl fmt::Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Deterministic initializer driven by [`SimpleRng`].
///
/// # Example
///
/// ```
/// use layer_backprop::init::{SeededInitializer, WeightInitializer};
///
/// let mut init = SeededInitializer::new(42);
/// let w = init.initialize((3, 2), "xavier-average").unwrap();
/// assert_eq!(w.dim(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct SeededInitializer {
    rng: SimpleRng,
}

impl SeededInitializer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl WeightInitializer for SeededInitializer {
    fn initialize(&mut self, shape: (usize, usize), method: &str) -> Result<Tensor> {
        let method: InitMethod = method.parse()?;
        let (fan_in, fan_out) = shape;
        if fan_in == 0 || fan_out == 0 {
            return Err(LayerError::InvalidConfig(format!(
                "cannot initialise a {}x{} weight matrix",
                fan_in, fan_out
            )));
        }

        match method.limit(fan_in, fan_out) {
            None => Ok(Tensor::zeros(shape)),
            Some(limit) => {
                let rng = &mut self.rng;
                Ok(Tensor::from_shape_fn(shape, |_| rng.gen_range_f64(-limit, limit)))
            }
        }
    }
}
