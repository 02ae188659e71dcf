//! Stable error codes for caller surfaces.
//!
//! A caller that only sees the code can still tell a rejected request from a
//! broken deployment.

pub const INVALID_CATEGORY: &str = "INVALID_CATEGORY";
pub const INVALID_NUMERIC_INPUT: &str = "INVALID_NUMERIC_INPUT";
pub const MODEL_INFERENCE: &str = "MODEL_INFERENCE";
pub const ARTIFACT_LOAD: &str = "ARTIFACT_LOAD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
