//! Layer configuration
//!
//! This module describes layers in JSON so that layer stacks can be set up
//! without code changes. It only constructs layers; running them forward and
//! backward stays with the caller.

use crate::error::{LayerError, Result};
use crate::init::{InitMethod, WeightInitializer, DEFAULT_INIT_METHOD};
use crate::layers::{AnyLayer, DenseLayer, GradientMode, ReluLayer, SigmoidLayer, TanhLayer};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const LAYER_TYPES: [&str; 4] = ["dense", "sigmoid", "tanh", "relu"];

/// Configuration for a single layer.
///
/// Only `dense` takes parameters:
///
/// - **Dense**: requires `input_size` and `output_size`; optional
///   `initialization` (default `"xavier-average"`) and `gradient_mode`
///   (`"reference"` or `"corrected"`, default `"reference"`)
/// - **Sigmoid**, **Tanh**, **ReLU**: no fields
///
/// # Example
///
/// ```json
/// {
///   "layer_type": "dense",
///   "input_size": 784,
///   "output_size": 128,
///   "initialization": "he",
///   "gradient_mode": "corrected"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LayerConfig {
    /// One of "dense", "sigmoid", "tanh", "relu" (case-insensitive)
    pub layer_type: String,

    /// Input width for Dense layer
    pub input_size: Option<usize>,
    /// Output width for Dense layer
    pub output_size: Option<usize>,
    /// Weight initialisation tag for Dense layer
    pub initialization: Option<String>,
    /// Weight-gradient convention for Dense layer
    pub gradient_mode: Option<GradientMode>,
}

/// A sequence of layer configurations, in forward order.
///
/// ```json
/// {
///   "layers": [
///     { "layer_type": "dense", "input_size": 2, "output_size": 4 },
///     { "layer_type": "tanh" },
///     { "layer_type": "dense", "input_size": 4, "output_size": 1 },
///     { "layer_type": "sigmoid" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureConfig {
    pub layers: Vec<LayerConfig>,
}

/// Loads an architecture configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it and validates the result.
///
/// # Examples
///
/// ```no_run
/// use layer_backprop::architecture::load_architecture;
///
/// let arch = load_architecture("config/xor.json").unwrap();
/// assert!(!arch.layers.is_empty());
/// ```
pub fn load_architecture<P: AsRef<Path>>(path: P) -> Result<ArchitectureConfig> {
    let contents = fs::read_to_string(path)?;
    parse_architecture(&contents)
}

/// Parses and validates an architecture from a JSON string.
pub fn parse_architecture(json: &str) -> Result<ArchitectureConfig> {
    let config: ArchitectureConfig = serde_json::from_str(json)?;
    validate_architecture(&config)?;
    Ok(config)
}

fn invalid(message: String) -> LayerError {
    LayerError::InvalidConfig(message)
}

/// Validates an architecture configuration.
///
/// Checks that:
/// - Architecture has at least one layer
/// - Each layer has the required fields for its type
/// - Sizes are positive and initialisation tags are known
/// - Consecutive dense layers agree on width (activations keep the width)
pub fn validate_architecture(config: &ArchitectureConfig) -> Result<()> {
    if config.layers.is_empty() {
        return Err(invalid("architecture must have at least one layer".to_string()));
    }

    for (i, layer) in config.layers.iter().enumerate() {
        validate_layer(layer, i)?;
    }

    let mut width: Option<(usize, usize)> = None;
    for (i, layer) in config.layers.iter().enumerate() {
        if layer.layer_type.to_lowercase() != "dense" {
            continue;
        }
        let (input_size, output_size) = dense_sizes(layer, i)?;
        if let Some((prev_index, prev_output)) = width {
            if prev_output != input_size {
                return Err(invalid(format!(
                    "layer connection mismatch: layer {} output size ({}) does not match layer {} input size ({})",
                    prev_index, prev_output, i, input_size
                )));
            }
        }
        width = Some((i, output_size));
    }

    Ok(())
}

/// Validates a single layer configuration.
pub fn validate_layer(layer: &LayerConfig, index: usize) -> Result<()> {
    let layer_type = layer.layer_type.to_lowercase();

    match layer_type.as_str() {
        "dense" => {
            let (input_size, output_size) = dense_sizes(layer, index)?;
            if input_size == 0 {
                return Err(invalid(format!(
                    "layer {}: input_size must be greater than 0",
                    index
                )));
            }
            if output_size == 0 {
                return Err(invalid(format!(
                    "layer {}: output_size must be greater than 0",
                    index
                )));
            }
            if let Some(ref method) = layer.initialization {
                method.parse::<InitMethod>()?;
            }
        }
        "sigmoid" | "tanh" | "relu" => {
            if layer.input_size.is_some()
                || layer.output_size.is_some()
                || layer.initialization.is_some()
                || layer.gradient_mode.is_some()
            {
                return Err(invalid(format!(
                    "layer {}: {} layer takes no parameters",
                    index, layer.layer_type
                )));
            }
        }
        _ => {
            return Err(invalid(format!(
                "layer {}: invalid layer type '{}', must be one of: {}",
                index,
                layer.layer_type,
                LAYER_TYPES.join(", ")
            )));
        }
    }

    Ok(())
}

fn dense_sizes(layer: &LayerConfig, index: usize) -> Result<(usize, usize)> {
    let input_size = layer
        .input_size
        .ok_or_else(|| invalid(format!("layer {}: dense layer requires 'input_size'", index)))?;
    let output_size = layer
        .output_size
        .ok_or_else(|| invalid(format!("layer {}: dense layer requires 'output_size'", index)))?;
    Ok((input_size, output_size))
}

/// Builds one layer from its configuration.
///
/// Dense weights come from `initializer` with the configured (or default)
/// method tag. `index` is the layer's position in its architecture and is
/// reported in error messages.
pub fn build_layer(
    config: &LayerConfig,
    index: usize,
    initializer: &mut dyn WeightInitializer,
) -> Result<AnyLayer> {
    validate_layer(config, index)?;

    let layer: AnyLayer = match config.layer_type.to_lowercase().as_str() {
        "dense" => {
            let (input_size, output_size) = dense_sizes(config, index)?;
            let method = config
                .initialization
                .as_deref()
                .unwrap_or(DEFAULT_INIT_METHOD);
            let mode = config.gradient_mode.unwrap_or_default();
            DenseLayer::new(input_size, output_size, method, initializer)?
                .with_gradient_mode(mode)
                .into()
        }
        "sigmoid" => SigmoidLayer::new().into(),
        "tanh" => TanhLayer::new().into(),
        "relu" => ReluLayer::new().into(),
        other => {
            return Err(invalid(format!("invalid layer type '{}'", other)));
        }
    };

    Ok(layer)
}

/// Builds every layer of an architecture, in order.
///
/// # Examples
///
/// ```
/// use layer_backprop::architecture::{build_layers, parse_architecture};
/// use layer_backprop::init::SeededInitializer;
///
/// let config = parse_architecture(r#"{"layers": [
///     {"layer_type": "dense", "input_size": 2, "output_size": 3},
///     {"layer_type": "relu"}
/// ]}"#).unwrap();
/// let layers = build_layers(&config, &mut SeededInitializer::new(42)).unwrap();
/// assert_eq!(layers.len(), 2);
/// ```
pub fn build_layers(
    config: &ArchitectureConfig,
    initializer: &mut dyn WeightInitializer,
) -> Result<Vec<AnyLayer>> {
    validate_architecture(config)?;
    config
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| build_layer(layer, i, initializer))
        .collect()
}
