//! On-disk classifier artifact, tagged by `kind`.

use brandrec_core::errors::{ArtifactError, BrandrecResult};
use brandrec_core::traits::IClassifier;
use serde::{Deserialize, Serialize};

use crate::softmax::SoftmaxClassifier;

/// Every classifier format the loader understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    SoftmaxLinear(SoftmaxClassifier),
}

impl ClassifierArtifact {
    pub fn validate(&self, path: &str) -> Result<(), ArtifactError> {
        match self {
            ClassifierArtifact::SoftmaxLinear(clf) => clf.validate(path),
        }
    }

    fn inner(&self) -> &dyn IClassifier {
        match self {
            ClassifierArtifact::SoftmaxLinear(clf) => clf,
        }
    }
}

impl IClassifier for ClassifierArtifact {
    fn predict_proba(&self, features: &[f64]) -> BrandrecResult<Vec<f64>> {
        self.inner().predict_proba(features)
    }

    fn n_classes(&self) -> usize {
        self.inner().n_classes()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}
