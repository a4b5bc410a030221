//! Classifier seam and the JSON linear-model artifact.

use mm_core::error::{read_artifact, ArtifactError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum ScoreError {
    #[error("Classifier does not support {0}")]
    Unsupported(&'static str),
    #[error("Feature width mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("No positive class in a {0}-class probability output")]
    MissingPositiveClass(usize),
    #[error("Model has no class at index {index} ({classes} classes configured)")]
    MissingClass { index: usize, classes: usize },
    #[error("Classifier returned a non-finite value")]
    NonFinite,
}

/// An externally trained model. Implementors advertise which capabilities
/// they offer; the unsupported ones keep the default `Unsupported` error.
pub trait Classifier: Send + Sync {
    fn supports_probability(&self) -> bool {
        false
    }

    fn supports_prediction(&self) -> bool {
        false
    }

    /// Class probabilities, negative class first.
    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, ScoreError> {
        Err(ScoreError::Unsupported("probability scoring"))
    }

    fn predict(&self, _features: &[f64]) -> Result<String, ScoreError> {
        Err(ScoreError::Unsupported("class prediction"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Logistic regression: probabilities and labels.
    Logistic,
    /// Margin-only linear model: labels only.
    Linear,
}

/// Binary linear model over a fixed-width feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub kind: ModelKind,
    /// `[negative, positive]`.
    pub classes: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.len() != 2 {
            return Err(ArtifactError::Invalid(format!(
                "expected 2 classes, found {}",
                self.classes.len()
            )));
        }
        if self.coefficients.is_empty() {
            return Err(ArtifactError::Invalid("model has no coefficients".into()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Invalid("model has non-finite parameters".into()));
        }
        Ok(())
    }

    fn decision(&self, features: &[f64]) -> Result<f64, ScoreError> {
        if features.len() != self.coefficients.len() {
            return Err(ScoreError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        let z = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if z.is_finite() { Ok(z) } else { Err(ScoreError::NonFinite) }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LinearModel {
    fn supports_probability(&self) -> bool {
        self.kind == ModelKind::Logistic
    }

    fn supports_prediction(&self) -> bool {
        true
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ScoreError> {
        if self.kind != ModelKind::Logistic {
            return Err(ScoreError::Unsupported("probability scoring"));
        }
        let p = sigmoid(self.decision(features)?);
        Ok(vec![1.0 - p, p])
    }

    fn predict(&self, features: &[f64]) -> Result<String, ScoreError> {
        let z = self.decision(features)?;
        let index = usize::from(z > 0.0);
        self.classes.get(index).cloned().ok_or(ScoreError::MissingClass {
            index,
            classes: self.classes.len(),
        })
    }
}

/// Load the classifier artifact.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
    let raw = read_artifact(path)?;
    let model: LinearModel = serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    model.validate()?;
    debug!(path = %path.display(), kind = ?model.kind, width = model.coefficients.len(), "loaded classifier");
    Ok(Arc::new(model))
}
