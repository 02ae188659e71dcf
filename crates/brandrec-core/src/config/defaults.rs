//! Default values for every config field.

pub const DEFAULT_CLASSIFIER_PATH: &str = "models/classifier.json";
pub const DEFAULT_SCALER_PATH: &str = "models/scaler.json";

pub const DEFAULT_TOP_K: usize = crate::constants::DEFAULT_TOP_K;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
