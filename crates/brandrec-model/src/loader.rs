//! Startup loading of the classifier and scaler artifacts.
//!
//! The classifier is required: any failure here is fatal to the caller. The
//! scaler is optional, and a configured scaler path with no file behind it
//! means "no scaling". A scaler file that exists but does not parse is still
//! an error.

use std::path::Path;

use brandrec_core::config::ModelConfig;
use brandrec_core::errors::{ArtifactError, BrandrecResult};
use brandrec_core::traits::{IClassifier, IScaler};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::artifact::ClassifierArtifact;
use crate::scaler::StandardScaler;

/// A loaded artifact plus the fingerprint of the file it came from.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub artifact: T,
    /// First 16 hex chars of the blake3 hash of the file contents.
    pub fingerprint: String,
}

/// Everything the engine needs, loaded once.
pub struct ArtifactSet {
    pub classifier: Box<dyn IClassifier>,
    pub scaler: Option<Box<dyn IScaler>>,
    pub classifier_fingerprint: String,
    pub scaler_fingerprint: Option<String>,
}

impl ArtifactSet {
    /// Load the classifier and, when configured and present, the scaler.
    pub fn load(config: &ModelConfig) -> BrandrecResult<Self> {
        let classifier = load_classifier(&config.classifier_path)?;
        let scaler = match &config.scaler_path {
            Some(path) => load_scaler(path)?,
            None => {
                debug!("no scaler configured");
                None
            }
        };

        let (scaler, scaler_fingerprint) = match scaler {
            Some(loaded) => (
                Some(Box::new(loaded.artifact) as Box<dyn IScaler>),
                Some(loaded.fingerprint),
            ),
            None => (None, None),
        };

        Ok(Self {
            classifier: Box::new(classifier.artifact),
            scaler,
            classifier_fingerprint: classifier.fingerprint,
            scaler_fingerprint,
        })
    }
}

/// Load and validate a classifier artifact.
pub fn load_classifier(path: impl AsRef<Path>) -> BrandrecResult<Loaded<ClassifierArtifact>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let _span = brandrec_observability::artifact_load_span!("classifier", shown).entered();

    let (artifact, fingerprint): (ClassifierArtifact, String) = read_json(path)?;
    artifact.validate(&shown)?;

    info!(
        fingerprint = %fingerprint,
        kind = artifact.name(),
        classes = artifact.n_classes(),
        "classifier loaded"
    );
    Ok(Loaded {
        artifact,
        fingerprint,
    })
}

/// Load and validate a scaler artifact. A missing file yields `Ok(None)`.
pub fn load_scaler(path: impl AsRef<Path>) -> BrandrecResult<Option<Loaded<StandardScaler>>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let _span = brandrec_observability::artifact_load_span!("scaler", shown).entered();

    if !path.exists() {
        info!("scaler file not found, features will not be scaled");
        return Ok(None);
    }

    let (artifact, fingerprint): (StandardScaler, String) = read_json(path)?;
    artifact.validate(&shown)?;

    info!(fingerprint = %fingerprint, "scaler loaded");
    Ok(Some(Loaded {
        artifact,
        fingerprint,
    }))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<(T, String), ArtifactError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(ArtifactError::NotFound { path: display });
    }
    let bytes = std::fs::read(path).map_err(|e| ArtifactError::Unreadable {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Malformed {
        path: display,
        reason: e.to_string(),
    })?;
    Ok((value, fingerprint(&bytes)))
}

fn fingerprint(bytes: &[u8]) -> String {
    let hex = blake3::hash(bytes).to_hex();
    hex.as_str()[..16].to_string()
}
