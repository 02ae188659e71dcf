mod artifact_error;
mod brandrec_error;
mod config_error;
pub mod error_code;
mod inference_error;

pub use artifact_error::ArtifactError;
pub use brandrec_error::{BrandrecError, BrandrecResult};
pub use config_error::ConfigError;
pub use inference_error::InferenceError;
