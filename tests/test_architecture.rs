//! Tests for architecture parsing and building
//!
//! This file tests the architecture module including:
//! - Loading valid JSON architecture configs from disk
//! - Handling invalid JSON and missing files
//! - Validating layer fields and connections
//! - Building layers from configs

use layer_backprop::architecture::{build_layers, load_architecture, parse_architecture};
use layer_backprop::init::SeededInitializer;
use layer_backprop::layers::{GradientMode, Layer};
use layer_backprop::LayerError;
use ndarray::array;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

// ============================================================================
// Valid Architecture Loading Tests
// ============================================================================

mod valid_architecture_tests {
    use super::*;

    #[test]
    fn test_load_dense_stack() {
        let config_json = r#"{
  "layers": [
    { "layer_type": "dense", "input_size": 784, "output_size": 128 },
    { "layer_type": "relu" },
    { "layer_type": "dense", "input_size": 128, "output_size": 10, "initialization": "xavier-in" }
  ]
}"#;

        let temp_file = write_temp_config(config_json);
        let config = load_architecture(temp_file.path()).unwrap();

        assert_eq!(config.layers.len(), 3);
        assert_eq!(config.layers[0].input_size, Some(784));
        assert_eq!(config.layers[0].initialization, None);
        assert_eq!(config.layers[1].layer_type, "relu");
        assert_eq!(config.layers[2].initialization.as_deref(), Some("xavier-in"));
    }

    #[test]
    fn test_load_gradient_mode() {
        let config_json = r#"{"layers": [
            { "layer_type": "dense", "input_size": 2, "output_size": 2, "gradient_mode": "corrected" },
            { "layer_type": "dense", "input_size": 2, "output_size": 2, "gradient_mode": "reference" },
            { "layer_type": "dense", "input_size": 2, "output_size": 2 }
        ]}"#;

        let config = parse_architecture(config_json).unwrap();
        assert_eq!(config.layers[0].gradient_mode, Some(GradientMode::Corrected));
        assert_eq!(config.layers[1].gradient_mode, Some(GradientMode::Reference));
        assert_eq!(config.layers[2].gradient_mode, None);
    }

    #[test]
    fn test_load_single_activation() {
        let config = parse_architecture(r#"{"layers": [{"layer_type": "Sigmoid"}]}"#).unwrap();
        assert_eq!(config.layers.len(), 1);
    }

    #[test]
    fn test_load_bundled_xor_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/xor.json");
        let config = load_architecture(path).unwrap();
        let types: Vec<&str> = config.layers.iter().map(|l| l.layer_type.as_str()).collect();
        assert_eq!(types, vec!["dense", "tanh", "dense", "sigmoid"]);
    }

    #[test]
    fn test_load_bundled_reference_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/reference.json");
        let config = load_architecture(path).unwrap();
        assert_eq!(config.layers.len(), 3);
        assert_eq!(config.layers[2].initialization.as_deref(), Some("he"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_json() {
        let temp_file = write_temp_config(r#"{"layers": [ { "layer_type": "dense", "#);
        assert!(matches!(
            load_architecture(temp_file.path()),
            Err(LayerError::Json(_))
        ));
    }

    #[test]
    fn test_wrong_field_type() {
        let result = parse_architecture(
            r#"{"layers": [{"layer_type": "dense", "input_size": "four", "output_size": 2}]}"#,
        );
        assert!(matches!(result, Err(LayerError::Json(_))));
    }

    #[test]
    fn test_unknown_gradient_mode() {
        let result = parse_architecture(
            r#"{"layers": [{"layer_type": "dense", "input_size": 2, "output_size": 2, "gradient_mode": "sideways"}]}"#,
        );
        assert!(matches!(result, Err(LayerError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_architecture("does/not/exist.json"),
            Err(LayerError::Io(_))
        ));
    }

    #[test]
    fn test_empty_layers() {
        assert!(matches!(
            parse_architecture(r#"{"layers": []}"#),
            Err(LayerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_dense_missing_output_size() {
        let err = parse_architecture(r#"{"layers": [{"layer_type": "dense", "input_size": 4}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("output_size"));
    }

    #[test]
    fn test_unknown_initialization() {
        let result = parse_architecture(
            r#"{"layers": [{"layer_type": "dense", "input_size": 2, "output_size": 2, "initialization": "orthogonal"}]}"#,
        );
        match result {
            Err(LayerError::UnknownInitialization(tag)) => assert_eq!(tag, "orthogonal"),
            other => panic!("expected UnknownInitialization, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_layer_type() {
        let err = parse_architecture(r#"{"layers": [{"layer_type": "dropout"}]}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("dropout"));
        assert!(message.contains("dense, sigmoid, tanh, relu"));
    }

    #[test]
    fn test_connection_mismatch() {
        let err = parse_architecture(
            r#"{"layers": [
                {"layer_type": "dense", "input_size": 3, "output_size": 5},
                {"layer_type": "sigmoid"},
                {"layer_type": "dense", "input_size": 4, "output_size": 1}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("layer connection mismatch"));
    }
}

// ============================================================================
// Building Tests
// ============================================================================

mod build_tests {
    use super::*;

    #[test]
    fn test_build_xor_layers() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/xor.json");
        let config = load_architecture(path).unwrap();
        let layers = build_layers(&config, &mut SeededInitializer::new(42)).unwrap();

        let names: Vec<&str> = layers.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Dense", "Tanh", "Dense", "Sigmoid"]);

        let first = layers[0].as_dense().unwrap();
        assert_eq!(first.weights().dim(), (2, 4));
        assert_eq!(first.gradient_mode(), GradientMode::Corrected);
        assert_eq!(layers[0].parameter_count(), 2 * 4 + 4);
        assert_eq!(layers[1].parameter_count(), 0);
    }

    #[test]
    fn test_build_is_deterministic_per_seed() {
        let config = parse_architecture(
            r#"{"layers": [{"layer_type": "dense", "input_size": 3, "output_size": 3}]}"#,
        )
        .unwrap();

        let a = build_layers(&config, &mut SeededInitializer::new(9)).unwrap();
        let b = build_layers(&config, &mut SeededInitializer::new(9)).unwrap();
        assert_eq!(
            a[0].as_dense().unwrap().weights(),
            b[0].as_dense().unwrap().weights()
        );
    }

    #[test]
    fn test_built_layers_run_forward_and_backward() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/xor.json");
        let config = load_architecture(path).unwrap();
        let mut layers = build_layers(&config, &mut SeededInitializer::new(7)).unwrap();

        let mut activation = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
        for layer in layers.iter_mut() {
            activation = layer.forward(&activation).unwrap();
        }
        assert_eq!(activation.dim(), (4, 1));
        assert!(activation.iter().all(|&y| y > 0.0 && y < 1.0));

        let mut grad = &activation - &array![[0.0], [1.0], [1.0], [0.0]];
        for layer in layers.iter_mut().rev() {
            grad = layer.backward(&grad).unwrap();
        }
        assert_eq!(grad.dim(), (4, 2));
        assert_eq!(
            layers[2].as_dense().unwrap().weight_gradients().dim(),
            (4, 1)
        );
    }

    #[test]
    fn test_build_zeros_initialization() {
        let config = parse_architecture(
            r#"{"layers": [{"layer_type": "dense", "input_size": 2, "output_size": 3, "initialization": "zeros"}]}"#,
        )
        .unwrap();
        let layers = build_layers(&config, &mut SeededInitializer::new(1)).unwrap();
        let dense = layers[0].as_dense().unwrap();
        assert!(dense.weights().iter().all(|&w| w == 0.0));
        assert!(dense.biases().iter().all(|&b| b == 0.0));
    }
}
