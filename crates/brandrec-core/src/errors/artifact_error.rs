/// Errors raised while loading a classifier or scaler artifact at startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("artifact {path} could not be read: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("artifact {path} is malformed: {reason}")]
    Malformed { path: String, reason: String },

    #[error("artifact {path} does not match the brand label set: {reason}")]
    LabelMismatch { path: String, reason: String },
}
