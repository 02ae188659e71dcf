use brandrec_core::category::CategoryField;
use brandrec_core::errors::*;

#[test]
fn invalid_category_carries_field_and_value() {
    let err = BrandrecError::InvalidCategory {
        field: CategoryField::Speaker,
        value: "12 W Speaker Output".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("speaker"));
    assert!(msg.contains("12 W Speaker Output"));
}

#[test]
fn invalid_numeric_input_carries_field() {
    let err = BrandrecError::InvalidNumericInput {
        field: "price",
        value: "cheap".into(),
    };
    assert!(err.to_string().contains("price"));
    assert!(err.to_string().contains("cheap"));
}

#[test]
fn input_errors_are_distinguished_from_model_errors() {
    let input = BrandrecError::InvalidCategory {
        field: CategoryField::OperatingSystem,
        value: "x".into(),
    };
    let model: BrandrecError = InferenceError::ClassCountMismatch {
        expected: 16,
        actual: 10,
    }
    .into();
    assert!(input.is_input_error());
    assert!(!model.is_input_error());
    assert_ne!(input.error_code(), model.error_code());
}

#[test]
fn class_count_mismatch_carries_values() {
    let err = InferenceError::ClassCountMismatch {
        expected: 16,
        actual: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("16"));
    assert!(msg.contains("10"));
}

// --- From impls ---

#[test]
fn inference_error_converts_to_model_inference() {
    let err: BrandrecError = InferenceError::ScalerFailed {
        reason: "nan".into(),
    }
    .into();
    assert!(matches!(err, BrandrecError::ModelInference(_)));
    assert_eq!(err.error_code(), error_code::MODEL_INFERENCE);
}

#[test]
fn artifact_error_converts_to_artifact_load() {
    let err: BrandrecError = ArtifactError::NotFound {
        path: "/models/classifier.json".into(),
    }
    .into();
    assert!(matches!(err, BrandrecError::ArtifactLoad(_)));
    assert!(err.to_string().contains("/models/classifier.json"));
}

#[test]
fn config_error_converts() {
    let err: BrandrecError = ConfigError::FileNotFound {
        path: "brandrec.toml".into(),
    }
    .into();
    assert!(matches!(err, BrandrecError::Config(_)));
}

#[test]
fn error_codes_are_distinct_per_variant() {
    let errors: Vec<BrandrecError> = vec![
        BrandrecError::InvalidCategory {
            field: CategoryField::Speaker,
            value: "5 W".into(),
        },
        BrandrecError::InvalidNumericInput {
            field: "price",
            value: "abc".into(),
        },
        InferenceError::ScalerFailed {
            reason: "boom".into(),
        }
        .into(),
        ArtifactError::NotFound {
            path: "classifier.json".into(),
        }
        .into(),
        ConfigError::FileNotFound {
            path: "brandrec.toml".into(),
        }
        .into(),
    ];
    let codes: std::collections::HashSet<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn coded_message_prefixes_error_code() {
    let err = BrandrecError::InvalidNumericInput {
        field: "stars",
        value: "".into(),
    };
    assert!(err.coded_message().starts_with("[INVALID_NUMERIC_INPUT] "));
}
